//! Tests for loading game configuration from disk.

use console_tictactoe::{GameConfig, Mark};
use std::io::Write;

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_player = \"X\"").unwrap();
    writeln!(file, "show_board = false").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.first_player(), Some(Mark::X));
    assert_eq!(*config.seed(), None);
    assert!(!*config.show_board());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_bad_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_player = \"Q\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
