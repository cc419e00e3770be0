//! Game configuration.
//!
//! Grid dimensions, vowel count for generated grids, and how many
//! consecutive passes end a game. Loadable from JSON; missing fields take
//! their defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLUMNS: usize = 5;
pub const DEFAULT_VOWELS: usize = 4;
pub const DEFAULT_PASS_LIMIT: u32 = 2;

/// Largest accepted row or column count.
pub const MAX_DIMENSION: usize = 26;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("grid dimensions must be between 1 and {max}, got {rows}x{columns}", max = MAX_DIMENSION)]
    DimensionsOutOfRange { rows: usize, columns: usize },
}

/// Rules and sizing for a match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub vowels: usize,
    /// Consecutive passes that end the game; None never ends it by passing.
    pub pass_limit: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            vowels: DEFAULT_VOWELS,
            pass_limit: Some(DEFAULT_PASS_LIMIT),
        }
    }
}

impl GameConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_range = |n: usize| (1..=MAX_DIMENSION).contains(&n);
        if !in_range(self.rows) || !in_range(self.columns) {
            return Err(ConfigError::DimensionsOutOfRange {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}
