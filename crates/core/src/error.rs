//! Error types for txconf
//!
//! Only the loading edge can fail: reading and parsing configuration files,
//! and reading a materialized value back into a typed form. Resolving and
//! mapping option values never fails.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for txconf operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Error types for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read or written
    #[error("Failed to access config file '{}': {source}", path.display())]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration file is not valid
    #[error("Failed to parse config file '{}': {message}", path.display())]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A value has a shape that cannot be used as an option value
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue {
        /// Option key
        key: String,
        /// What was wrong with it
        message: String,
    },

    /// A string is not one of the known transaction modes
    #[error("Unknown transaction mode '{0}'. Expected \"disabled\", \"xa\" or \"enabled\".")]
    UnknownTransactionMode(String),
}

impl ConfigError {
    /// Create an I/O error for a path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error for a path
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid value error for a key
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}
