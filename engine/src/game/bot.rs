use crate::rng::SessionRng;

use super::board::Board;
use super::types::{Difficulty, Mark, Outcome, Position};
use super::win_detector::evaluate;

/// Picks a move for the computer according to the selected difficulty.
/// Returns `None` on a full board or while no difficulty is selected.
pub fn choose_move(
    difficulty: Difficulty,
    board: &Board,
    computer: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    match difficulty {
        Difficulty::Random => random_move(board, rng),
        Difficulty::Optimal => best_move(board, computer),
        Difficulty::Unselected => None,
    }
}

pub fn random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available = board.available_moves();
    if available.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available.len());
    Some(available[idx])
}

/// Exhaustive full-depth minimax from the computer's perspective:
/// win +1, loss -1, draw 0. Ties break toward the first candidate in
/// row-major order. Searches a working copy, so the caller's board is
/// unchanged after return.
pub fn best_move(board: &Board, computer: Mark) -> Option<Position> {
    let available = board.available_moves();
    if available.is_empty() {
        return None;
    }

    let mut working = board.clone();
    let mut best_score = i32::MIN;
    let mut best = None;

    for pos in available {
        working.set(pos.row, pos.col, computer).ok()?;
        let score = minimax(&mut working, computer, false);
        working.set(pos.row, pos.col, Mark::Empty).ok()?;

        if score > best_score {
            best_score = score;
            best = Some(pos);
        }
    }

    best
}

fn minimax(board: &mut Board, computer: Mark, is_maximizing: bool) -> i32 {
    match evaluate(board) {
        Outcome::Won(mark) => {
            return if mark == computer { 1 } else { -1 };
        }
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let moves = board.available_moves();

    if is_maximizing {
        let mut max_score = i32::MIN;
        for pos in moves {
            let _ = board.set(pos.row, pos.col, computer);
            let score = minimax(board, computer, false);
            let _ = board.set(pos.row, pos.col, Mark::Empty);
            max_score = max_score.max(score);
        }
        max_score
    } else {
        // evaluate() returned InProgress, so an opponent exists
        let opponent = computer.opponent().unwrap_or(Mark::X);
        let mut min_score = i32::MAX;
        for pos in moves {
            let _ = board.set(pos.row, pos.col, opponent);
            let score = minimax(board, computer, true);
            let _ = board.set(pos.row, pos.col, Mark::Empty);
            min_score = min_score.min(score);
        }
        min_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::BOARD_SIZE;
    use Mark::{Empty as E, O, X};

    #[test]
    fn test_random_move_is_legal() {
        let mut rng = SessionRng::new(42);
        let mut board = Board::new();
        board.set(0, 0, X).unwrap();
        board.set(1, 1, O).unwrap();
        for _ in 0..50 {
            let pos = random_move(&board, &mut rng).unwrap();
            assert!(board.is_empty_at(pos.row, pos.col));
        }
    }

    #[test]
    fn test_random_move_none_on_full_board() {
        let mut rng = SessionRng::new(42);
        let mut board = Board::new();
        for row in 0..3 {
            for col in 0..3 {
                board.set(row, col, X).unwrap();
            }
        }
        assert_eq!(random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_best_move_takes_immediate_win() {
        let board = Board::from_marks(3, &[
            O, O, E,
            X, X, E,
            E, E, E,
        ]);
        assert_eq!(best_move(&board, O), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_best_move_blocks_immediate_loss() {
        let board = Board::from_marks(3, &[
            X, X, E,
            E, O, E,
            E, E, E,
        ]);
        assert_eq!(best_move(&board, O), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_best_move_does_not_mutate_board() {
        let board = Board::from_marks(3, &[
            X, E, E,
            E, O, E,
            E, E, X,
        ]);
        let snapshot = board.clone();
        best_move(&board, O).unwrap();
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_best_move_none_on_full_board() {
        let mut board = Board::new();
        for row in 0..3 {
            for col in 0..3 {
                board.set(row, col, X).unwrap();
            }
        }
        assert_eq!(best_move(&board, O), None);
    }

    // Standard minimax guarantee: two optimal players always draw,
    // whichever opening move is forced on the first player.
    #[test]
    fn test_optimal_vs_optimal_draws_from_every_opening() {
        for opening_row in 0..BOARD_SIZE {
            for opening_col in 0..BOARD_SIZE {
                let mut board = Board::new();
                board.set(opening_row, opening_col, X).unwrap();
                let mut mover = O;

                loop {
                    match evaluate(&board) {
                        Outcome::InProgress => {}
                        outcome => {
                            assert_eq!(
                                outcome,
                                Outcome::Draw,
                                "opening ({}, {}) did not draw",
                                opening_row,
                                opening_col
                            );
                            break;
                        }
                    }
                    let pos = best_move(&board, mover).unwrap();
                    board.set(pos.row, pos.col, mover).unwrap();
                    mover = mover.opponent().unwrap();
                }
            }
        }
    }

    #[test]
    fn test_choose_move_dispatch() {
        let mut rng = SessionRng::new(42);
        let board = Board::new();
        assert_eq!(choose_move(Difficulty::Unselected, &board, O, &mut rng), None);
        assert!(choose_move(Difficulty::Random, &board, O, &mut rng).is_some());
        assert!(choose_move(Difficulty::Optimal, &board, O, &mut rng).is_some());
    }
}
