//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Nothing here mutates state,
//! so the engine can ask them after every move without caching results.

pub mod draw;
pub mod win;

pub use draw::is_board_filled;
pub use win::{has_player_won, LINES};
