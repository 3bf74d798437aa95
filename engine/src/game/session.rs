use crate::rng::SessionRng;

use super::board::Board;
use super::bot::choose_move;
use super::types::{Difficulty, GameMode, Mark, Outcome, Position};
use super::win_detector::evaluate;

pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    SelectingMode,
    SelectingDifficulty,
    Playing,
    Over,
}

/// Owns the live board and all game state. Inputs arrive as
/// best-effort UI events: anything invalid for the current phase is
/// ignored without an error, matching GUI click semantics.
pub struct Session {
    board: Board,
    turn: Mark,
    mode: GameMode,
    difficulty: Difficulty,
    outcome: Outcome,
    rng: SessionRng,
}

impl Session {
    pub fn new() -> Self {
        Self::with_rng(SessionRng::from_random())
    }

    pub fn with_rng(rng: SessionRng) -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            mode: GameMode::Unselected,
            difficulty: Difficulty::Unselected,
            outcome: Outcome::InProgress,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.mode == GameMode::Unselected {
            return Phase::SelectingMode;
        }
        if self.mode == GameMode::VsComputer && self.difficulty == Difficulty::Unselected {
            return Phase::SelectingDifficulty;
        }
        if self.outcome == Outcome::InProgress {
            Phase::Playing
        } else {
            Phase::Over
        }
    }

    /// Returns true when the input was applied, false when ignored.
    pub fn select_mode(&mut self, mode: GameMode) -> bool {
        if self.phase() != Phase::SelectingMode || mode == GameMode::Unselected {
            return false;
        }
        self.mode = mode;
        true
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.phase() != Phase::SelectingDifficulty || difficulty == Difficulty::Unselected {
            return false;
        }
        self.difficulty = difficulty;
        true
    }

    /// Human move at (row, col). Accepted only while playing, when the
    /// side to move is human, and the cell is in bounds and empty.
    pub fn attempt_move(&mut self, row: usize, col: usize) -> bool {
        if self.phase() != Phase::Playing {
            return false;
        }
        if self.mode == GameMode::VsComputer && self.turn == COMPUTER_MARK {
            return false;
        }
        if !self.board.is_empty_at(row, col) {
            return false;
        }
        self.apply_move(Position::new(row, col));
        true
    }

    /// Plays the computer's turn when one is pending. Called once per
    /// presentation tick; a no-op in every other state. Returns the
    /// position the bot played.
    pub fn tick(&mut self) -> Option<Position> {
        if self.phase() != Phase::Playing
            || self.mode != GameMode::VsComputer
            || self.turn != COMPUTER_MARK
        {
            return None;
        }
        let pos = choose_move(self.difficulty, &self.board, COMPUTER_MARK, &mut self.rng)?;
        self.apply_move(pos);
        Some(pos)
    }

    /// Restart after a finished game. Mode and difficulty selections
    /// are retained across resets.
    pub fn reset(&mut self) -> bool {
        if self.phase() != Phase::Over {
            return false;
        }
        self.board.clear();
        self.turn = Mark::X;
        self.outcome = Outcome::InProgress;
        true
    }

    fn apply_move(&mut self, pos: Position) {
        // Callers checked bounds and emptiness already.
        let _ = self.board.set(pos.row, pos.col, self.turn);
        self.outcome = evaluate(&self.board);
        if self.outcome == Outcome::InProgress {
            self.turn = self.turn.opponent().unwrap_or(Mark::X);
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
