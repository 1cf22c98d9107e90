//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating tween configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a configuration file
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration text is not valid TOML for this schema
    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    /// Lifetime must be a positive, finite number
    #[error("lifetime must be positive, got {0}")]
    InvalidLifetime(f64),

    /// Repeat delay must be a non-negative, finite number
    #[error("repeat delay must not be negative, got {0}")]
    InvalidRepeatDelay(f64),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
