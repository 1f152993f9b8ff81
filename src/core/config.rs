//! Game configuration.
//!
//! Front ends configure a game once at start (or on reset) by providing a
//! `GameConfig`. Configs deserialize from TOML; every field has a default,
//! so an empty document is the classic 3×3 game.

use serde::{Deserialize, Serialize};

use super::Mark;
use crate::board::Board;
use crate::error::ConfigError;
use crate::powerups::PowerUpInventory;

/// Configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length N of the N×N board.
    pub board_size: usize,

    /// Power-ups each player starts with.
    pub power_ups: PowerUpInventory,

    /// Seed for bomb targeting.
    pub seed: u64,

    /// Who moves first.
    pub first_player: Mark,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            power_ups: PowerUpInventory::default(),
            seed: 42,
            first_player: Mark::First,
        }
    }
}

impl GameConfig {
    /// Default config with the given board size.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        Self::default().with_board_size(size)
    }

    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    pub fn with_power_ups(mut self, power_ups: PowerUpInventory) -> Self {
        self.power_ups = power_ups;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_first_player(mut self, mark: Mark) -> Self {
        self.first_player = mark;
        self
    }

    /// Check the config describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::cell_count_for(self.board_size)?;
        Ok(())
    }

    /// Parse and validate a TOML document.
    ///
    /// ```
    /// use rust_toe::core::GameConfig;
    ///
    /// let config = GameConfig::from_toml_str("board_size = 4\nseed = 7").unwrap();
    /// assert_eq!(config.board_size, 4);
    /// assert_eq!(config.seed, 7);
    /// assert_eq!(config.power_ups.bomb, 1);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 3);
        assert_eq!(config.power_ups, PowerUpInventory::uniform(1));
        assert_eq!(config.first_player, Mark::First);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::with_size(5)
            .with_seed(9)
            .with_power_ups(PowerUpInventory::empty())
            .with_first_player(Mark::Second);

        assert_eq!(config.board_size, 5);
        assert_eq!(config.seed, 9);
        assert_eq!(config.power_ups.freeze, 0);
        assert_eq!(config.first_player, Mark::Second);
    }

    #[test]
    fn test_zero_size_invalid() {
        let err = GameConfig::with_size(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Board(BoardError::InvalidSize { size: 0 })));
    }

    #[test]
    fn test_from_toml_nested() {
        let config = GameConfig::from_toml_str(
            r#"
            board_size = 5
            first_player = "Second"

            [power_ups]
            bomb = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.board_size, 5);
        assert_eq!(config.first_player, Mark::Second);
        assert_eq!(config.power_ups, PowerUpInventory { freeze: 1, double_move: 1, bomb: 2 });
    }

    #[test]
    fn test_from_toml_rejects_bad_input() {
        assert!(matches!(
            GameConfig::from_toml_str("board_size = 0"),
            Err(ConfigError::Board(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("board_size = \"big\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::with_size(4).with_seed(11);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
