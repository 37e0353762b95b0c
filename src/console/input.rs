//! Move input sources.

use crate::games::tictactoe::{Mark, Move, ParseMoveError};
use std::io::BufRead;
use tracing::{debug, instrument};

/// Supplies one move per request.
pub trait InputSource {
    /// Reads the next move for `turn`.
    ///
    /// Returns `Ok(None)` once input has ended.
    fn next_move(&mut self, turn: Mark) -> Result<Option<Move>, InputError>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn next_move(&mut self, turn: Mark) -> Result<Option<Move>, InputError> {
        (**self).next_move(turn)
    }
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn next_move(&mut self, turn: Mark) -> Result<Option<Move>, InputError> {
        (**self).next_move(turn)
    }
}

/// Input could not be turned into a move.
///
/// The underlying error is available through `source()`.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum InputError {
    /// Reading from the underlying source failed.
    #[display("Failed to read move")]
    Io(std::io::Error),
    /// Text was not two integers.
    #[display("Move text is malformed")]
    Malformed(ParseMoveError),
}

/// Reads moves as lines of text, e.g. `"2 3"`.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineInput<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl LineInput<std::io::StdinLock<'static>> {
    /// Reads from standard input.
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    #[instrument(skip(self))]
    fn next_move(&mut self, turn: Mark) -> Result<Option<Move>, InputError> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            debug!("Input ended");
            return Ok(None);
        }
        let mv = self.line.parse::<Move>()?;
        debug!(%mv, "Read move");
        Ok(Some(mv))
    }
}
