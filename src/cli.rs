//! Command-line interface for console_tictactoe.

use crate::games::tictactoe::Mark;
use clap::Parser;

/// Two-player tic-tac-toe in the terminal.
///
/// Enter moves as `row col`, both 1 through 3.
#[derive(Parser, Debug)]
#[command(name = "console_tictactoe")]
#[command(about = "Two-player console tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Mark that moves first (X or O); random if omitted
    #[arg(long)]
    pub first: Option<Mark>,

    /// Seed for picking the first player
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not print the board between moves
    #[arg(long)]
    pub no_board: bool,
}
