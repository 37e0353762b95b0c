//! Turn loop between the engine, an input source and an output sink.

use super::input::{InputError, InputSource};
use super::output::{GameEvent, OutputSink};
use crate::games::tictactoe::{FirstPlayerChooser, GameEngine, GameResult, LoopState, MoveError};
use tracing::{debug, info, instrument, warn};

/// Reasons a game stopped before reaching a result.
///
/// Wrapped errors are reported through `source()`, not repeated in the message.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// The input source failed or produced unreadable text.
    #[display("Could not read the next move")]
    Input(InputError),
    /// Input ended while a move was still expected.
    #[display("Input ended before the game finished")]
    #[from(skip)]
    InputClosed,
    /// The output sink could not be written.
    #[display("Failed to write game output")]
    Output(std::io::Error),
    /// The engine refused a move for a reason other than a bad spot.
    #[display("Engine refused the move")]
    #[from(skip)]
    Move(MoveError),
}

/// Drives one game from first prompt to result.
#[derive(Debug)]
pub struct Orchestrator<I, O> {
    game: GameEngine,
    input: I,
    output: O,
    show_board: bool,
    state: LoopState,
}

impl<I: InputSource, O: OutputSink> Orchestrator<I, O> {
    /// Creates an orchestrator; `chooser` picks who opens.
    #[instrument(skip_all)]
    pub fn new<C: FirstPlayerChooser + ?Sized>(chooser: &mut C, input: I, output: O) -> Self {
        Self {
            game: GameEngine::start(chooser),
            input,
            output,
            show_board: true,
            state: LoopState::AwaitingMove,
        }
    }

    /// Enables or disables the board snapshot after each prompt.
    pub fn show_board(mut self, show: bool) -> Self {
        self.show_board = show;
        self
    }

    /// Returns the game.
    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    /// Returns the loop phase.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Returns the output sink.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Splits into the game, input and output.
    pub fn into_parts(self) -> (GameEngine, I, O) {
        (self.game, self.input, self.output)
    }

    fn emit(&mut self, event: GameEvent) -> Result<(), SessionError> {
        self.output.emit(&event)?;
        Ok(())
    }

    fn emit_board(&mut self) -> Result<(), SessionError> {
        if self.show_board {
            self.emit(GameEvent::Board(self.game.board().clone()))?;
        }
        Ok(())
    }

    /// Runs until someone wins or the board fills.
    ///
    /// Rejected spots are reported and re-prompted for the same mark.
    /// Calling this after the game has finished returns the result again.
    ///
    /// # Errors
    ///
    /// See [`SessionError`].
    #[instrument(skip(self), fields(first = %self.game.turn()))]
    pub fn run(&mut self) -> Result<GameResult, SessionError> {
        info!("Starting game");

        while self.state == LoopState::AwaitingMove {
            let turn = self.game.turn();
            self.emit(GameEvent::TurnStarted(turn))?;
            self.emit_board()?;

            debug!(%turn, "Waiting for move");
            let Some(mv) = self.input.next_move(turn)? else {
                warn!(%turn, "Input closed mid-game");
                return Err(SessionError::InputClosed);
            };

            match self.game.play(mv) {
                Ok(result) => {
                    self.state = result.into();
                    match result {
                        GameResult::InProgress => {}
                        GameResult::Win(mark) => {
                            self.emit(GameEvent::Won(mark))?;
                            self.emit_board()?;
                        }
                        GameResult::Draw => {
                            self.emit(GameEvent::Draw)?;
                            self.emit_board()?;
                        }
                    }
                }
                Err(e) if e.is_invalid_spot() => {
                    warn!(%turn, %mv, error = %e, "Rejected move");
                    self.emit(GameEvent::InvalidSpot)?;
                }
                Err(e) => return Err(SessionError::Move(e)),
            }
        }

        let result = self.game.result();
        info!(%result, moves = self.game.history().len(), "Game finished");
        Ok(result)
    }
}

/// Plays a full game and returns its result.
///
/// Convenience over [`Orchestrator`] for callers that only need the outcome.
#[instrument(skip_all, fields(show_board = show_board))]
pub fn run_game_loop<C, I, O>(
    chooser: &mut C,
    input: I,
    output: O,
    show_board: bool,
) -> Result<GameResult, SessionError>
where
    C: FirstPlayerChooser + ?Sized,
    I: InputSource,
    O: OutputSink,
{
    Orchestrator::new(chooser, input, output)
        .show_board(show_board)
        .run()
}
