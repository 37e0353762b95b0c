//! Console adapters and the turn loop.
//!
//! The loop only talks to [`InputSource`] and [`OutputSink`], so it runs the
//! same against stdin/stdout and against in-memory fixtures.

mod input;
mod orchestrator;
mod output;

pub use input::{InputError, InputSource, LineInput};
pub use orchestrator::{run_game_loop, Orchestrator, SessionError};
pub use output::{ConsoleOutput, GameEvent, OutputSink};
