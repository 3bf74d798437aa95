use super::board::Board;
use super::types::{Mark, Outcome};

/// Scans rows, columns and both diagonals for a complete single-mark
/// line. Check order is fixed: row i before column i for each index,
/// then the main diagonal, then the anti-diagonal; the first complete
/// line wins. Under alternating play only one line owner is possible,
/// so the order only pins down determinism.
pub fn evaluate(board: &Board) -> Outcome {
    let size = board.size();

    for i in 0..size {
        if let Some(mark) = line_owner(board, |k| (i, k)) {
            return Outcome::Won(mark);
        }
        if let Some(mark) = line_owner(board, |k| (k, i)) {
            return Outcome::Won(mark);
        }
    }

    if let Some(mark) = line_owner(board, |k| (k, k)) {
        return Outcome::Won(mark);
    }
    if let Some(mark) = line_owner(board, |k| (k, size - 1 - k)) {
        return Outcome::Won(mark);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

fn line_owner<F>(board: &Board, cell_at: F) -> Option<Mark>
where
    F: Fn(usize) -> (usize, usize),
{
    let (row, col) = cell_at(0);
    let first = board.get(row, col).ok()?;
    if first == Mark::Empty {
        return None;
    }
    for k in 1..board.size() {
        let (row, col) = cell_at(k);
        if board.get(row, col).ok()? != first {
            return None;
        }
    }
    Some(first)
}
