mod board;
mod bot;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot::{best_move, choose_move, random_move};
pub use session::{Phase, Session, COMPUTER_MARK};
pub use types::{Difficulty, GameMode, Mark, Outcome, Position, BOARD_SIZE};
pub use win_detector::evaluate;
