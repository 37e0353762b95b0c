//! Status messages and where they go.

use crate::games::tictactoe::{Board, Mark};
use std::io::{self, Write};

/// Something the player should be told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move is expected from this mark.
    TurnStarted(Mark),
    /// The last move was off the board or onto a taken cell.
    InvalidSpot,
    /// Snapshot of the board.
    Board(Board),
    /// This mark completed a line.
    Won(Mark),
    /// Board filled without a line.
    Draw,
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::TurnStarted(mark) => write!(f, "Player {} turn", mark),
            GameEvent::InvalidSpot => write!(f, "Invalid spot. Try again!"),
            GameEvent::Board(board) => write!(f, "{}", board),
            GameEvent::Won(mark) => write!(f, "Player {} wins the game!", mark),
            GameEvent::Draw => write!(f, "Match Draw!"),
        }
    }
}

/// Receives game events.
pub trait OutputSink {
    /// Delivers one event.
    fn emit(&mut self, event: &GameEvent) -> io::Result<()>;
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn emit(&mut self, event: &GameEvent) -> io::Result<()> {
        (**self).emit(event)
    }
}

impl<T: OutputSink + ?Sized> OutputSink for Box<T> {
    fn emit(&mut self, event: &GameEvent) -> io::Result<()> {
        (**self).emit(event)
    }
}

/// Keeps every event, in order.
impl OutputSink for Vec<GameEvent> {
    fn emit(&mut self, event: &GameEvent) -> io::Result<()> {
        self.push(event.clone());
        Ok(())
    }
}

/// Writes each event as text followed by a newline.
#[derive(Debug)]
pub struct ConsoleOutput<W> {
    writer: W,
}

impl<W: Write> ConsoleOutput<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleOutput<io::Stdout> {
    /// Writes to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for ConsoleOutput<W> {
    fn emit(&mut self, event: &GameEvent) -> io::Result<()> {
        writeln!(self.writer, "{}", event)?;
        self.writer.flush()
    }
}
