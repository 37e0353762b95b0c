//! Game configuration loaded from TOML.

use crate::games::tictactoe::{FirstPlayerChooser, FixedChooser, Mark, RandomChooser};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a console game.
///
/// Every field is optional in the file; missing ones take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Force the opening mark instead of picking at random.
    #[serde(default)]
    first_player: Option<Mark>,

    /// Seed for the first-player coin flip.
    #[serde(default)]
    seed: Option<u64>,

    /// Print the board after each prompt.
    #[serde(default = "default_show_board")]
    show_board: bool,
}

fn default_show_board() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: None,
            seed: None,
            show_board: default_show_board(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides the opening mark.
    pub fn with_first_player(mut self, mark: Option<Mark>) -> Self {
        if mark.is_some() {
            self.first_player = mark;
        }
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Builds the first-player chooser these settings describe.
    ///
    /// A forced mark wins over a seed; with neither, the flip uses OS entropy.
    #[instrument(skip(self))]
    pub fn first_player_chooser(&self) -> Box<dyn FirstPlayerChooser> {
        match (self.first_player, self.seed) {
            (Some(mark), _) => Box::new(FixedChooser(mark)),
            (None, Some(seed)) => Box::new(RandomChooser::seeded(seed)),
            (None, None) => Box::new(RandomChooser::from_entropy()),
        }
    }

    /// Turns the board display off.
    pub fn hide_board(mut self) -> Self {
        self.show_board = false;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert!(*config.show_board());
    }

    #[test]
    fn test_full_file() {
        let config = GameConfig::from_toml(
            "first_player = \"O\"\nseed = 99\nshow_board = false\n",
        )
        .unwrap();
        assert_eq!(*config.first_player(), Some(Mark::O));
        assert_eq!(*config.seed(), Some(99));
        assert!(!*config.show_board());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GameConfig::from_toml("players = 3\n").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_forced_first_player_beats_seed() {
        let config = GameConfig::default()
            .with_seed(Some(5))
            .with_first_player(Some(Mark::O));
        let mut chooser = config.first_player_chooser();
        for _ in 0..10 {
            assert_eq!(chooser.choose_first_player(), Mark::O);
        }
    }

    #[test]
    fn test_seeded_chooser_repeats() {
        let config = GameConfig::default().with_seed(Some(11));
        let a: Vec<Mark> = {
            let mut c = config.first_player_chooser();
            (0..16).map(|_| c.choose_first_player()).collect()
        };
        let b: Vec<Mark> = {
            let mut c = config.first_player_chooser();
            (0..16).map(|_| c.choose_first_player()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_overrides_only_when_given() {
        let config = GameConfig::from_toml("seed = 1\n")
            .unwrap()
            .with_seed(None)
            .with_first_player(Some(Mark::X));
        assert_eq!(*config.seed(), Some(1));
        assert_eq!(*config.first_player(), Some(Mark::X));
    }
}
