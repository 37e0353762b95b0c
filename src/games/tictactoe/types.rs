//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// Symbol placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the other player's mark.
    ///
    /// Applying it twice yields the original mark.
    pub fn swap(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Free-function form of [`Mark::swap`].
pub fn swap_turn(mark: Mark) -> Mark {
    mark.swap()
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns true if the cell holds `mark`.
    pub fn is(self, mark: Mark) -> bool {
        self == Cell::Occupied(mark)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "-"),
            Cell::Occupied(mark) => write!(f, "{}", mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Rows and columns are addressed 1-indexed, matching what players type.
/// A cell moves from [`Cell::Empty`] to a mark at most once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; BOARD_SIZE * BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE * BOARD_SIZE],
        }
    }

    /// Maps a 1-indexed (row, col) pair to a row-major index.
    fn index(row: i64, col: i64) -> Option<usize> {
        let in_range = |v: i64| (1..=BOARD_SIZE as i64).contains(&v);
        if in_range(row) && in_range(col) {
            Some((row as usize - 1) * BOARD_SIZE + (col as usize - 1))
        } else {
            None
        }
    }

    /// Returns the cell at a 1-indexed position, or `None` off the board.
    pub fn get(&self, row: i64, col: i64) -> Option<Cell> {
        Self::index(row, col).map(|i| self.cells[i])
    }

    /// Places `mark` at a 1-indexed position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] when `row` or `col` is outside 1..=3 and
    /// [`MoveError::CellOccupied`] when the cell already holds a mark. The board is
    /// untouched in both cases.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: i64, col: i64, mark: Mark) -> Result<(), MoveError> {
        let idx = Self::index(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if self.cells[idx] != Cell::Empty {
            return Err(MoveError::CellOccupied { row, col });
        }
        self.cells[idx] = Cell::Occupied(mark);
        Ok(())
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; BOARD_SIZE * BOARD_SIZE] {
        &self.cells
    }

    /// Iterates over the three rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIZE)
    }

    /// Number of cells still empty.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Empty).count()
    }
}

/// Creates a fresh board with every cell empty.
pub fn create_board() -> Board {
    Board::new()
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
