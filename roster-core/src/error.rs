//! Error type shared by every ordering operation.

use thiserror::Error;

/// Failures of a single ordering call.
///
/// Every variant is raised before the sequence is reordered, so a caller that
/// receives an error still holds its records in their original order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderingError {
    /// A record lacks the field the ordering reads
    #[error("record {index} has no `{field}` field")]
    MissingField {
        /// Position of the record in the sequence
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// A field is present but its value cannot serve as a sort key
    #[error(
        "record {index} has an invalid `{field}` value {value:?}: {reason}"
    )]
    InvalidKey {
        /// Position of the record in the sequence
        index: usize,
        /// Name of the offending field
        field: &'static str,
        /// The stored value, rendered as text
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The mode selector names no known ordering
    #[error("unknown ordering mode: {0:?}")]
    UnknownMode(String),

    /// The record provider could not deliver records
    #[error("record source failed: {0}")]
    Source(String),
}

/// Result of an ordering operation
pub type Result<T> = std::result::Result<T, OrderingError>;
