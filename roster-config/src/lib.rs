//! Shared configuration library for the roster tools.
//!
//! This crate centralizes config loading/validation, tracing setup, the
//! JSON-file record source, and the `roster-order` command line. The binary
//! is a thin wrapper over [`cli::run`].

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod source;

pub use error::ConfigLoadError;
pub use models::{ConfigSource, LoggingConfig, RosterConfig};
pub use source::JsonFileSource;
