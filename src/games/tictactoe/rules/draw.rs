//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a draw. The engine only asks after
/// ruling out a win for the mover.
#[instrument(skip(board))]
pub fn is_board_filled(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
