//! Field marker types for typed key extraction
//!
//! These zero-sized types name the record fields the engine can order by.
//! Each marker implements [`RecordField`] to specify its key type and how
//! stored values are parsed into it.

use super::keys::{IdKey, NameKey, TimestampKey};
use super::traits::RecordField;
use roster_model::{FieldValue, fields};

/// Order by numeric identifier
///
/// Accepts integers and the decimal text of an integer. Anything else is
/// rejected rather than compared as text.
#[derive(Copy, Clone, Debug)]
pub struct IdField;

impl RecordField for IdField {
    type Key = IdKey;
    const ID: &'static str = fields::ID;

    fn parse(value: &FieldValue) -> Result<IdKey, String> {
        match value {
            FieldValue::Integer(id) => Ok(IdKey(*id)),
            FieldValue::Text(text) => text
                .parse::<i64>()
                .map(IdKey)
                .map_err(|err| format!("not an integer: {err}")),
            other => {
                Err(format!("expected an integer, found {}", other.kind()))
            }
        }
    }
}

/// Order by family name (alphabetical)
#[derive(Copy, Clone, Debug)]
pub struct NameField;

impl RecordField for NameField {
    type Key = NameKey;
    const ID: &'static str = fields::NAME;

    fn parse(value: &FieldValue) -> Result<NameKey, String> {
        match value {
            FieldValue::Text(text) => Ok(NameKey(text.clone())),
            other => Err(format!("expected text, found {}", other.kind())),
        }
    }
}

/// Order by creation timestamp
#[derive(Copy, Clone, Debug)]
pub struct TimestampField;

impl RecordField for TimestampField {
    type Key = TimestampKey;
    const ID: &'static str = fields::TIMESTAMP;

    fn parse(value: &FieldValue) -> Result<TimestampKey, String> {
        match value {
            FieldValue::Text(text) => TimestampKey::parse(text),
            other => Err(format!("expected text, found {}", other.kind())),
        }
    }
}
