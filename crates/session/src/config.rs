//! Session settings loaded from TOML
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! same behaviour as the original game: a fixed Paper opponent, ties counted
//! in the win rate, and the last three moves shown.
//!
//! ```toml
//! opponent = "random:42"
//! exclude_ties = true
//! last_moves = 5
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ConfigError;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Opponent spec, see [`crate::create_opponent`]
    pub opponent: String,
    /// Leave ties out of the win-rate denominator
    pub exclude_ties: bool,
    /// Width of the last-moves strip
    pub last_moves: usize,
    pub logging: LoggingConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            opponent: "fixed:P".to_string(),
            exclude_ties: false,
            last_moves: 3,
            logging: LoggingConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Parse settings from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.last_moves == 0 {
            return Err(ConfigError::InvalidValue {
                field: "last_moves",
                reason: "must be at least 1".to_string(),
            });
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!(
                    "expected one of {}, got {:?}",
                    LOG_FORMATS.join(", "),
                    self.logging.format
                ),
            });
        }
        Ok(())
    }
}

/// Accepted values of `logging.format`
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl LoggingConfig {
    /// Install the global tracing subscriber. `RUST_LOG` overrides `level`.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        // try_init: a subscriber may already be installed (tests, embedding)
        let _ = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
    }
}
