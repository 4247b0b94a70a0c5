use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Reasons a [`GameConfig`] cannot start a game
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },
    #[error("board sides must not exceed {max} cells, got {width}x{height}")]
    BoardTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
    #[error("initial_snake_length must be at least 1")]
    EmptySnake,
    #[error(
        "a snake of length {length} does not fit below the center of a board {height} rows high"
    )]
    SnakeTooLong { length: usize, height: usize },
    #[error("round_millis must be positive")]
    ZeroPacing,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the board in cells
    pub board_width: usize,
    /// Height of the board in cells
    pub board_height: usize,
    /// Number of walls the game keeps topping up to
    pub wall_count: usize,
    /// Number of apples the game keeps topping up to
    pub apple_count: usize,
    /// Last round to play; zero or negative plays until the snake dies
    pub max_rounds: i64,
    /// Freeze the snake and every interaction involving it
    pub debug: bool,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Seed for wall and apple placement; random when absent
    pub seed: Option<u64>,
    /// Milliseconds per round in the terminal mode
    pub round_millis: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 40,
            board_height: 30,
            wall_count: 2,
            apple_count: 3,
            max_rounds: -1,
            debug: false,
            initial_snake_length: 3,
            seed: None,
            round_millis: 150,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom board size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            board_width: width,
            board_height: height,
            ..Default::default()
        }
    }

    /// Create a small, empty board for testing
    pub fn small() -> Self {
        Self {
            wall_count: 0,
            apple_count: 0,
            ..Self::new(10, 10)
        }
    }

    /// The round limit, if the game has one
    pub fn round_limit(&self) -> Option<u64> {
        u64::try_from(self.max_rounds).ok().filter(|&rounds| rounds > 0)
    }

    /// Check that a game can be started with this configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width == 0 || self.board_height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.board_width,
                height: self.board_height,
            });
        }

        // cells are addressed with i32 coordinates
        let max = i32::MAX as usize;
        if self.board_width > max || self.board_height > max {
            return Err(ConfigError::BoardTooLarge {
                width: self.board_width,
                height: self.board_height,
                max,
            });
        }

        if self.initial_snake_length == 0 {
            return Err(ConfigError::EmptySnake);
        }

        // the body hangs down from the center row
        if self.initial_snake_length > self.board_height / 2 + 1 {
            return Err(ConfigError::SnakeTooLong {
                length: self.initial_snake_length,
                height: self.board_height,
            });
        }

        if self.round_millis == 0 {
            return Err(ConfigError::ZeroPacing);
        }

        Ok(())
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to deserialize config")?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON, creating parent directories
    pub fn save_json_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_width, 40);
        assert_eq!(config.board_height, 30);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.round_limit(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.board_width, 15);
        assert_eq!(config.board_height, 12);
        assert_eq!(config.wall_count, 2);
    }

    #[test]
    fn test_round_limit() {
        let mut config = GameConfig::default();
        config.max_rounds = 0;
        assert_eq!(config.round_limit(), None);
        config.max_rounds = -5;
        assert_eq!(config.round_limit(), None);
        config.max_rounds = 12;
        assert_eq!(config.round_limit(), Some(12));
    }

    #[test]
    fn test_validation_errors() {
        let config = GameConfig::new(0, 10);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyBoard {
                width: 0,
                height: 10
            })
        );

        let mut config = GameConfig::small();
        config.initial_snake_length = 0;
        assert_eq!(config.validate(), Err(ConfigError::EmptySnake));

        // center row 5, so rows 5..=0 hold at most 6 cells
        config.initial_snake_length = 6;
        assert!(config.validate().is_ok());
        config.initial_snake_length = 7;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SnakeTooLong { length: 7, .. })
        ));

        let mut config = GameConfig::small();
        config.round_millis = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPacing));
    }

    #[test]
    fn test_board_wider_than_coordinates_is_rejected() {
        let config = GameConfig::new(5_000_000_000, 10);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoardTooLarge {
                width: 5_000_000_000,
                height: 10,
                ..
            })
        ));

        let config = GameConfig::new(10, i32::MAX as usize + 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoardTooLarge { .. })
        ));

        let config = GameConfig::new(i32::MAX as usize, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("game.json");

        let mut config = GameConfig::small();
        config.seed = Some(99);
        config.debug = true;
        config.save_json_file(&path).unwrap();

        let loaded = GameConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("game.json");
        std::fs::write(&path, r#"{ "board_width": 12, "wall_count": 5 }"#).unwrap();

        let config = GameConfig::from_json_file(&path).unwrap();
        assert_eq!(config.board_width, 12);
        assert_eq!(config.wall_count, 5);
        assert_eq!(config.board_height, 30);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = GameConfig::from_json_file(&temp_dir.path().join("nope.json"));
        assert!(result.is_err());
    }
}
