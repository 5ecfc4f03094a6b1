use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading settings or building an opponent
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown opponent '{0}' (expected fixed, fixed:<R|P|S>, random or random:<seed>)")]
    UnknownOpponent(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
