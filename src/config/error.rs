//! Error types for loading station configuration.

use thiserror::Error;

/// Errors that can occur while reading configuration overrides.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// An environment variable was set but could not be parsed.
    #[error("Invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}
