//! Game engine for tic-tac-toe.

use super::action::{Move, MoveError};
use super::first_player::FirstPlayerChooser;
use super::phases::GameResult;
use super::rules::{has_player_won, is_board_filled};
use super::types::{Board, Mark};
use tracing::{debug, instrument};

/// A single game: one board and whose turn it is.
///
/// Each game is its own value; nothing is shared between instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: Mark,
    history: Vec<(Mark, Move)>,
}

impl GameEngine {
    /// Creates a game with an empty board and `first` to move.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            turn: first,
            history: Vec::new(),
        }
    }

    /// Creates a game, asking `chooser` who opens.
    #[instrument(skip(chooser))]
    pub fn start<C: FirstPlayerChooser + ?Sized>(chooser: &mut C) -> Self {
        Self::new(chooser.choose_first_player())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark expected to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[(Mark, Move)] {
        &self.history
    }

    /// Evaluates the board from scratch.
    pub fn result(&self) -> GameResult {
        if let Some(mark) = [Mark::X, Mark::O]
            .into_iter()
            .find(|&m| has_player_won(&self.board, m))
        {
            GameResult::Win(mark)
        } else if is_board_filled(&self.board) {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }

    /// Plays `mv` for the current turn.
    ///
    /// On success the mover is checked for a win, then the board for a draw;
    /// only a continuing game hands the turn over.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has ended, otherwise whatever
    /// [`Board::apply_move`] rejects. Board and turn are unchanged on error.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play(&mut self, mv: Move) -> Result<GameResult, MoveError> {
        if self.result().is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.turn;
        self.board.apply_move(mv.row, mv.col, mover)?;
        self.history.push((mover, mv));

        let outcome = if has_player_won(&self.board, mover) {
            GameResult::Win(mover)
        } else if is_board_filled(&self.board) {
            GameResult::Draw
        } else {
            self.turn = mover.swap();
            GameResult::InProgress
        };

        debug!(%mv, %outcome, next = %self.turn, "Move applied");
        Ok(outcome)
    }
}
