use super::types::{Mark, Position, BOARD_SIZE};

/// Square grid of marks. Holds no turn or outcome state; validating
/// turn order and game-over status is the session's job.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: Vec<Mark>,
    size: usize,
}

impl Board {
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE)
    }

    pub fn with_size(size: usize) -> Self {
        Self {
            cells: vec![Mark::Empty; size * size],
            size,
        }
    }

    #[cfg(test)]
    pub fn from_marks(size: usize, marks: &[Mark]) -> Self {
        assert_eq!(marks.len(), size * size);
        Self {
            cells: marks.to_vec(),
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Mark, String> {
        if row >= self.size || col >= self.size {
            return Err(format!("Position ({}, {}) is out of range", row, col));
        }
        Ok(self.cells[row * self.size + col])
    }

    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), String> {
        if row >= self.size || col >= self.size {
            return Err(format!("Position ({}, {}) is out of range", row, col));
        }
        self.cells[row * self.size + col] = mark;
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Ok(Mark::Empty)
    }

    /// Empty cells in row-major order, top-left to bottom-right.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cells[row * self.size + col] == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn clear(&mut self) {
        self.cells.fill(Mark::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.size(), BOARD_SIZE);
        assert!(!board.is_full());
        assert_eq!(board.available_moves().len(), BOARD_SIZE * BOARD_SIZE);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(1, 2, Mark::X).unwrap();
        assert_eq!(board.get(1, 2), Ok(Mark::X));
        assert_eq!(board.get(2, 1), Ok(Mark::Empty));
    }

    #[test]
    fn test_out_of_range() {
        let mut board = Board::new();
        assert!(board.get(3, 0).is_err());
        assert!(board.get(0, 3).is_err());
        assert!(board.set(3, 3, Mark::O).is_err());
        assert!(!board.is_empty_at(3, 0));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for row in 0..3 {
            for col in 0..3 {
                board.set(row, col, Mark::X).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_available_moves_row_major() {
        let mut board = Board::new();
        board.set(0, 0, Mark::X).unwrap();
        board.set(1, 1, Mark::O).unwrap();
        let moves = board.available_moves();
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], Position::new(0, 1));
        assert_eq!(moves[1], Position::new(0, 2));
        assert_eq!(moves[2], Position::new(1, 0));
        assert_eq!(moves[3], Position::new(1, 2));
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new();
        board.set(0, 0, Mark::X).unwrap();
        board.clear();
        assert_eq!(board.get(0, 0), Ok(Mark::Empty));
        assert_eq!(board.available_moves().len(), 9);
    }
}
