//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML for this configuration
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("History capacity must be at least 1 (found {0})")]
    InvalidHistoryCapacity(usize),
}
