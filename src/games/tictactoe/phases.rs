//! Game result and loop phase types.

use super::Mark;

/// Result of the board as it stands.
///
/// Always derived from the board, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Moves are still accepted.
    InProgress,
    /// The mark filled a line.
    Win(Mark),
    /// Board full with no line.
    Draw,
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Win(mark) => Some(*mark),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }

    /// True once no further move is accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Win(mark) => write!(f, "Player {} wins", mark),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Phase of the turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopState {
    /// Waiting on the current turn's move.
    AwaitingMove,
    /// Terminal: someone won.
    Won,
    /// Terminal: board filled.
    Draw,
}

impl From<GameResult> for LoopState {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress => LoopState::AwaitingMove,
            GameResult::Win(_) => LoopState::Won,
            GameResult::Draw => LoopState::Draw,
        }
    }
}
