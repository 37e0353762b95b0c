//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use tracing::instrument;

/// Every winning line as 1-indexed (row, col) triples.
pub const LINES: [[(i64, i64); 3]; 8] = [
    // Rows
    [(1, 1), (1, 2), (1, 3)],
    [(2, 1), (2, 2), (2, 3)],
    [(3, 1), (3, 2), (3, 3)],
    // Columns
    [(1, 1), (2, 1), (3, 1)],
    [(1, 2), (2, 2), (3, 2)],
    [(1, 3), (2, 3), (3, 3)],
    // Diagonals
    [(1, 1), (2, 2), (3, 3)],
    [(1, 3), (2, 2), (3, 1)],
];

/// Checks whether `mark` fills any row, column or diagonal.
///
/// Only the given mark is considered, so a move by one player can never
/// report a win for the other.
#[instrument(skip(board))]
pub fn has_player_won(board: &Board, mark: Mark) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|&(row, col)| board.get(row, col).is_some_and(|cell| cell.is(mark)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(moves: &[(i64, i64, Mark)]) -> Board {
        let mut board = Board::new();
        for &(row, col, mark) in moves {
            board.apply_move(row, col, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_player_won(&board, Mark::X));
        assert!(!has_player_won(&board, Mark::O));
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(&[(1, 1, Mark::X), (1, 2, Mark::X), (1, 3, Mark::X)]);
        assert!(has_player_won(&board, Mark::X));
        assert!(!has_player_won(&board, Mark::O));
    }

    #[test]
    fn test_winner_column() {
        let board = board_from(&[(1, 1, Mark::X), (2, 1, Mark::X), (3, 1, Mark::X)]);
        assert!(has_player_won(&board, Mark::X));
    }

    #[test]
    fn test_winner_main_diagonal() {
        let board = board_from(&[(1, 1, Mark::O), (2, 2, Mark::O), (3, 3, Mark::O)]);
        assert!(has_player_won(&board, Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from(&[(1, 3, Mark::X), (2, 2, Mark::X), (3, 1, Mark::X)]);
        assert!(has_player_won(&board, Mark::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        // X O -
        // - X O
        // O - -
        let board = board_from(&[
            (1, 1, Mark::X),
            (1, 2, Mark::O),
            (2, 2, Mark::X),
            (2, 3, Mark::O),
            (3, 1, Mark::O),
        ]);
        assert!(!has_player_won(&board, Mark::X));
        assert!(!has_player_won(&board, Mark::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut board = Board::new();
            for (row, col) in line {
                board.apply_move(row, col, Mark::O).unwrap();
            }
            assert!(has_player_won(&board, Mark::O), "line {:?}", line);
            assert!(!has_player_won(&board, Mark::X));
        }
    }
}
