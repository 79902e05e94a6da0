//! Tests for loading game configuration from disk.

use quadline::{GameConfig, Player};
use std::io::Write;

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "player_one = \"Ada\"\nplayer_two = \"Bea\"\nfirst_player = \"two\"\nquit_key = \"x\""
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(config.label(Player::Player1), "Ada");
    assert_eq!(config.label(Player::Player2), "Bea");
    assert_eq!(*config.first_player(), Player::Player2);
    assert_eq!(*config.quit_key(), 'x');
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_one = ").unwrap();
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_whitespace_quit_key_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "quit_key = \" \"").unwrap();
    assert!(GameConfig::from_file(file.path()).is_err());
}
