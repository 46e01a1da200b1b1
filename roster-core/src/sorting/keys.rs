//! Sort key types for comparing records
//!
//! These types wrap the values parsed out of record fields. Parsing happens
//! once per record, before sorting, so comparisons themselves cannot fail.

use super::traits::SortKey;
use chrono::NaiveDateTime;
use roster_model::TIMESTAMP_FORMAT;

/// Numeric identifier key, compared as a signed integer
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct IdKey(pub i64);

impl SortKey for IdKey {}

/// Text key compared by Unicode code point
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NameKey(pub String);

impl SortKey for NameKey {}

/// Timestamp key holding the parsed instant
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TimestampKey(pub NaiveDateTime);

impl TimestampKey {
    /// Length of a timestamp rendered with [`TIMESTAMP_FORMAT`]
    pub const WIDTH: usize = "yyyy-MM-dd HH:mm:ss".len();

    /// Parse a stored timestamp, insisting on the exact zero-padded layout
    ///
    /// chrono accepts unpadded fields and runs of whitespace, so the parsed
    /// instant must render back to `raw` unchanged.
    pub fn parse(raw: &str) -> Result<Self, String> {
        if raw.len() != Self::WIDTH {
            return Err(format!(
                "expected {} characters in yyyy-MM-dd HH:mm:ss form, found {}",
                Self::WIDTH,
                raw.len()
            ));
        }

        let instant = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
            .map_err(|err| {
                format!("not a yyyy-MM-dd HH:mm:ss timestamp: {err}")
            })?;

        if instant.format(TIMESTAMP_FORMAT).to_string() != raw {
            return Err("not in zero-padded yyyy-MM-dd HH:mm:ss form".into());
        }

        Ok(TimestampKey(instant))
    }
}

impl SortKey for TimestampKey {}
