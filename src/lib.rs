//! Console tic-tac-toe library.
//!
//! Two players alternate placing X and O on a 3x3 board until one fills a
//! row, column or diagonal, or the board runs out of cells.
//!
//! # Architecture
//!
//! - **Games**: board, rules and the [`GameEngine`] state machine
//! - **Console**: [`InputSource`] / [`OutputSink`] adapters and the turn loop
//! - **Config**: TOML settings for the first player and board display
//!
//! # Example
//!
//! ```
//! use console_tictactoe::{run_game_loop, FixedChooser, GameEvent, GameResult, LineInput, Mark};
//! use std::io::Cursor;
//!
//! let input = LineInput::new(Cursor::new("1 1\n1 2\n2 1\n2 2\n3 1\n"));
//! let mut events: Vec<GameEvent> = Vec::new();
//! let result = run_game_loop(&mut FixedChooser(Mark::X), input, &mut events, false).unwrap();
//!
//! assert_eq!(result, GameResult::Win(Mark::X));
//! assert_eq!(events.last().unwrap().to_string(), "Player X wins the game!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

/// Command-line arguments for the binary.
pub mod cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console adapters and turn loop
pub use console::{
    run_game_loop, ConsoleOutput, GameEvent, InputError, InputSource, LineInput, Orchestrator,
    OutputSink, SessionError,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    create_board, has_player_won, is_board_filled, swap_turn, Board, Cell, FirstPlayerChooser,
    FixedChooser, GameEngine, GameResult, LoopState, Mark, Move, MoveError, ParseMoveError,
    RandomChooser, BOARD_SIZE,
};
