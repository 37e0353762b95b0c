//! First-class move types for tic-tac-toe.
//!
//! A move is what a player asked for, before the board has had a say.
//! Coordinates are kept as typed so out-of-range values reach validation.

use std::num::IntErrorKind;
use std::str::FromStr;
use tracing::instrument;

/// A requested placement at a 1-indexed (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct Move {
    /// Row, 1 through 3 when valid.
    pub row: i64,
    /// Column, 1 through 3 when valid.
    pub col: i64,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside 1..=3.
    #[display("Position ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },

    /// Target cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },

    /// The game already has a winner or is drawn.
    #[display("Game is already over")]
    GameOver,
}

impl MoveError {
    /// True for the errors a player fixes by choosing another spot.
    pub fn is_invalid_spot(&self) -> bool {
        matches!(self, MoveError::OutOfBounds { .. } | MoveError::CellOccupied { .. })
    }
}

/// Raw move text could not be read as two integers.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Expected two whitespace-separated integers, got {:?}", text)]
pub struct ParseMoveError {
    /// The offending input, trimmed.
    pub text: String,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseMoveError {
            text: s.trim().to_string(),
        };

        let mut parts = s.split_whitespace();
        let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };

        let row = parse_coordinate(row).ok_or_else(malformed)?;
        let col = parse_coordinate(col).ok_or_else(malformed)?;
        Ok(Move::new(row, col))
    }
}

/// Parses one coordinate, saturating integers too large for `i64`.
///
/// A huge number is still a number: it must reach bounds validation as an
/// off-board spot rather than fail as unreadable text.
fn parse_coordinate(token: &str) -> Option<i64> {
    match token.parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!("1 1".parse::<Move>().unwrap(), Move::new(1, 1));
        assert_eq!("  3\t2 \n".parse::<Move>().unwrap(), Move::new(3, 2));
    }

    #[test]
    fn test_parse_keeps_out_of_range_values() {
        // Range is the board's call, not the parser's.
        assert_eq!("1 4".parse::<Move>().unwrap(), Move::new(1, 4));
        assert_eq!("-2 0".parse::<Move>().unwrap(), Move::new(-2, 0));
    }

    #[test]
    fn test_parse_saturates_huge_integers() {
        assert_eq!(
            "99999999999999999999 1".parse::<Move>().unwrap(),
            Move::new(i64::MAX, 1)
        );
        assert_eq!(
            "2 -99999999999999999999".parse::<Move>().unwrap(),
            Move::new(2, i64::MIN)
        );
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert!("".parse::<Move>().is_err());
        assert!("1".parse::<Move>().is_err());
        assert!("1 2 3".parse::<Move>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = "a b".parse::<Move>().unwrap_err();
        assert_eq!(err.text, "a b");
        assert!("1 x".parse::<Move>().is_err());
    }

    #[test]
    fn test_invalid_spot_classification() {
        assert!(MoveError::OutOfBounds { row: 4, col: 1 }.is_invalid_spot());
        assert!(MoveError::CellOccupied { row: 1, col: 1 }.is_invalid_spot());
        assert!(!MoveError::GameOver.is_invalid_spot());
    }
}
