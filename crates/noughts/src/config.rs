//! Engine configuration.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::board::{DEFAULT_SIZE, MAX_SIZE};
use crate::bot::Sampling;
use crate::error::ConfigError;
use crate::types::is_reserved_symbol;

/// Tunables for a [`GameEngine`](crate::GameEngine).
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// size = 4
/// sampling = "free-list"
/// enforce_game_over = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct EngineConfig {
    /// Side length of the board.
    #[getter(copy)]
    size: usize,

    /// Strategy for drawing the automated player's cell.
    #[getter(copy)]
    sampling: Sampling,

    /// Reject moves once the game has an outcome.
    ///
    /// When false, termination is left to the caller and moves on a
    /// finished board are still applied.
    #[getter(copy)]
    enforce_game_over: bool,

    /// Name credited for automated moves.
    #[setters(into)]
    bot_name: String,

    /// Marker written by automated moves.
    #[getter(copy)]
    bot_symbol: char,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            sampling: Sampling::default(),
            enforce_game_over: true,
            bot_name: "bot".to_string(),
            bot_symbol: 'o',
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {e}")))?;
        let config = Self::from_toml(&content)?;
        info!(size = config.size, sampling = %config.sampling, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(ConfigError::new(format!(
                "size must be between 1 and {MAX_SIZE}, got {}",
                self.size
            )));
        }
        if self.bot_name.trim().is_empty() {
            return Err(ConfigError::new("bot_name is empty"));
        }
        if is_reserved_symbol(self.bot_symbol) {
            return Err(ConfigError::new(format!(
                "bot_symbol {:?} is reserved",
                self.bot_symbol
            )));
        }
        Ok(())
    }
}
