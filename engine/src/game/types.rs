use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GameMode {
    Unselected,
    TwoPlayer,
    VsComputer,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Difficulty {
    Unselected,
    Random,
    Optimal,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    InProgress,
    Draw,
    Won(Mark),
}
