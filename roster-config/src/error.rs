//! Typed configuration failures.

use thiserror::Error;

/// Configuration values that parse but cannot be used.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The configured log filter is not a valid `EnvFilter` directive.
    #[error("invalid log filter {filter:?}: {message}")]
    InvalidLogFilter {
        /// The rejected directive
        filter: String,
        /// Parser message
        message: String,
    },

    /// A global subscriber was installed before.
    #[error("logging already initialised: {0}")]
    LoggingInit(String),
}
