pub mod game;
pub mod logger;
pub mod rng;

pub use game::{
    Board, Difficulty, GameMode, Mark, Outcome, Phase, Position, Session, BOARD_SIZE,
};
pub use rng::SessionRng;
