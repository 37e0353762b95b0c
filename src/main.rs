//! Console tic-tac-toe
//!
//! Reads `row col` lines from stdin and prints game status to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use console_tictactoe::cli::Cli;
use console_tictactoe::{run_game_loop, ConsoleOutput, GameConfig, LineInput};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for the game
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    debug!(?config, "Effective configuration");

    let mut chooser = config.first_player_chooser();
    let result = run_game_loop(
        &mut chooser,
        LineInput::stdin(),
        ConsoleOutput::stdout(),
        *config.show_board(),
    )
    .context("Game ended abnormally")?;

    info!(%result, "Exiting");
    Ok(())
}

/// Merges the config file (if any) with command-line overrides.
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let config = config.with_first_player(cli.first).with_seed(cli.seed);
    Ok(if cli.no_board { config.hide_board() } else { config })
}
