//! Game configuration loaded from TOML and merged with CLI flags.

use crate::ai::Difficulty;
use crate::mode::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Who plays whom.
    mode: GameMode,

    /// Strength of automated participants.
    #[serde(rename = "level")]
    difficulty: Difficulty,

    /// Seed for every random source; `None` draws from the OS.
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration from explicit values.
    #[instrument]
    pub fn new(mode: GameMode, difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self {
            mode,
            difficulty,
            seed,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides fields with any values given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(
        self,
        mode: Option<GameMode>,
        difficulty: Option<Difficulty>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            mode: mode.unwrap_or(self.mode),
            difficulty: difficulty.unwrap_or(self.difficulty),
            seed: seed.or(self.seed),
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
