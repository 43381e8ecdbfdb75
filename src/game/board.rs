use std::fmt;

use crate::constants::CELL_COUNT;

/// One of the two player marks. The first player of a match always holds `X`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// A single board cell: empty until a mark is written into it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Marked(Mark),
}

/// The 3x3 grid, stored flat in row-major order.
///
/// All writes go through [`Board::set_cell`]; a non-empty cell is never
/// overwritten.
#[derive(Debug)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Sets all cells back to empty.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Returns a copy of the cells, indexed 0..=8. Mutating the returned
    /// array has no effect on the board.
    pub fn state(&self) -> [Cell; CELL_COUNT] {
        self.cells
    }

    /// Writes `mark` into cell `index` and reports whether the write was
    /// accepted. A write is rejected, leaving the board untouched, when the
    /// index is out of range or the cell is already occupied.
    pub fn set_cell(&mut self, index: usize, mark: Mark) -> bool {
        if index >= CELL_COUNT || self.cells[index] != Cell::Empty {
            return false;
        }
        self.cells[index] = Cell::Marked(mark);
        true
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

    fn assert_empty(board: &Board) {
        itertools::assert_equal(board.state(), std::iter::repeat(Cell::Empty).take(CELL_COUNT));
    }

    #[test]
    fn new_board_is_empty() {
        assert_empty(&Board::new());
    }

    #[test]
    fn every_cell_accepts_exactly_one_write() {
        let mut board = Board::new();
        for index in 0..CELL_COUNT {
            assert!(board.set_cell(index, Mark::X));
            // occupied now, no mark may overwrite it
            assert!(!board.set_cell(index, Mark::X));
            assert!(!board.set_cell(index, Mark::O));
            assert_eq!(board.state()[index], Cell::Marked(Mark::X));
        }
    }

    #[test]
    fn out_of_range_writes_are_rejected() {
        let mut board = Board::new();
        assert!(!board.set_cell(CELL_COUNT, Mark::X));
        assert!(!board.set_cell(CELL_COUNT + 1, Mark::O));
        assert!(!board.set_cell(usize::MAX, Mark::X));
        assert_empty(&board);
    }

    #[test]
    fn reset_clears_any_prior_state() {
        let mut board = Board::new();
        board.set_cell(0, Mark::X);
        board.set_cell(4, Mark::O);
        board.set_cell(8, Mark::X);
        board.reset();
        assert_empty(&board);

        // the cleared cells accept writes again
        assert!(board.set_cell(4, Mark::X));
    }

    #[test]
    fn state_returns_a_detached_copy() {
        let mut board = Board::new();
        board.set_cell(0, Mark::X);

        let mut snapshot = board.state();
        snapshot[0] = Cell::Empty;
        snapshot[1] = Cell::Marked(Mark::O);

        assert_eq!(board.state()[0], Cell::Marked(Mark::X));
        assert_eq!(board.state()[1], Cell::Empty);
    }
}
