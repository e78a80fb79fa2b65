//! Game configuration.

use crate::{DEFAULT_FIRST_SIDE, DEFAULT_PAWN_SUPPLY, Side};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Holes per side of the board unless configured otherwise.
pub const DEFAULT_BOARD_SIZE: usize = 14;

/// Settings a game is created from.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// board_size = 10
/// pawn_supply = 30
/// first_side = "Dark"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Holes per side of the square board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Pawns each side starts with.
    #[serde(default = "default_pawn_supply")]
    pawn_supply: u32,

    /// Side that plays first.
    #[serde(default = "default_first_side")]
    first_side: Side,
}

#[instrument]
fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

#[instrument]
fn default_pawn_supply() -> u32 {
    DEFAULT_PAWN_SUPPLY
}

#[instrument]
fn default_first_side() -> Side {
    DEFAULT_FIRST_SIDE
}

impl GameConfig {
    /// Creates a configuration and validates it.
    #[instrument]
    pub fn new(board_size: usize, pawn_supply: u32, first_side: Side) -> Result<Self, ConfigError> {
        let config = Self {
            board_size,
            pawn_supply,
            first_side,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            board_size = config.board_size,
            pawn_supply = config.pawn_supply,
            first_side = %config.first_side,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Replaces the board size, keeping the configuration valid.
    pub fn with_board_size(mut self, board_size: usize) -> Result<Self, ConfigError> {
        self.board_size = board_size;
        self.validate()?;
        Ok(self)
    }

    /// Replaces the pawn supply, keeping the configuration valid.
    pub fn with_pawn_supply(mut self, pawn_supply: u32) -> Result<Self, ConfigError> {
        self.pawn_supply = pawn_supply;
        self.validate()?;
        Ok(self)
    }

    /// Checks that the configuration describes a playable game.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("board_size must be at least 1".to_string()));
        }
        if self.pawn_supply == 0 {
            return Err(ConfigError::new("pawn_supply must be at least 1".to_string()));
        }
        if !self.first_side.is_player() {
            return Err(ConfigError::new(
                "first_side must be Light or Dark".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            pawn_supply: DEFAULT_PAWN_SUPPLY,
            first_side: DEFAULT_FIRST_SIDE,
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
