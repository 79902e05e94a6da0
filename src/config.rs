//! Game configuration loaded from TOML.

use crate::games::quadline::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Player labels and session preferences.
///
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_", into)]
pub struct GameConfig {
    /// Label shown for player 1 (plays X).
    player_one: String,

    /// Label shown for player 2 (plays O).
    player_two: String,

    /// Who opens the first round.
    first_player: Player,

    /// Key that ends the session at the play-again prompt.
    quit_key: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one: Player::Player1.to_string(),
            player_two: Player::Player2.to_string(),
            first_player: Player::Player1,
            quit_key: 'q',
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
        info!(player_one = %config.player_one, player_two = %config.player_two, "Config loaded");
        Ok(config)
    }

    /// Parses and validates configuration text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects labels that would print as nothing and unusable quit keys.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_one.trim().is_empty() || self.player_two.trim().is_empty() {
            return Err(ConfigError::new("Player labels must not be blank".to_string()));
        }
        if self.quit_key.is_whitespace() {
            return Err(ConfigError::new("Quit key must be a visible character".to_string()));
        }
        Ok(())
    }

    /// Returns the label for a player.
    pub fn label(&self, player: Player) -> &str {
        match player {
            Player::Player1 => &self.player_one,
            Player::Player2 => &self.player_two,
        }
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
        assert_eq!(config.label(Player::Player1), "Player 1");
        assert_eq!(*config.quit_key(), 'q');
    }

    #[test]
    fn test_partial_file() {
        let config = GameConfig::from_toml("player_two = \"Bea\"\nfirst_player = \"two\"\n").unwrap();
        assert_eq!(config.label(Player::Player2), "Bea");
        assert_eq!(config.label(Player::Player1), "Player 1");
        assert_eq!(*config.first_player(), Player::Player2);
    }

    #[test]
    fn test_blank_label_rejected() {
        let err = GameConfig::from_toml("player_one = \"  \"").unwrap_err();
        assert!(err.message.contains("blank"));
    }

    #[test]
    fn test_unknown_player_rejected() {
        assert!(GameConfig::from_toml("first_player = \"three\"").is_err());
    }

    #[test]
    fn test_setters_override() {
        let config = GameConfig::default()
            .with_player_one("Ada")
            .with_first_player(Player::Player2);
        assert_eq!(config.label(Player::Player1), "Ada");
        assert_eq!(*config.first_player(), Player::Player2);
    }
}
