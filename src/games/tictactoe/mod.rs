//! Tic-tac-toe: board, rules and engine.

mod action;
mod first_player;
mod game;
mod phases;
pub mod rules;
mod types;

pub use action::{Move, MoveError, ParseMoveError};
pub use first_player::{FirstPlayerChooser, FixedChooser, RandomChooser};
pub use game::GameEngine;
pub use phases::{GameResult, LoopState};
pub use rules::{has_player_won, is_board_filled};
pub use types::{create_board, swap_turn, Board, Cell, Mark, BOARD_SIZE};
