//! Core traits for sortable record fields
//!
//! A field marker names one record field and knows how to turn its stored
//! value into a typed, totally ordered key.

use roster_model::{FieldValue, Record};

use crate::{OrderingError, Result};

/// Keys that can be compared for sorting
pub trait SortKey: Ord + Clone + Send + Sync {
    /// Compare two keys, flipping the result when `reverse` is set
    #[inline]
    fn compare_with_order(
        &self,
        other: &Self,
        reverse: bool,
    ) -> std::cmp::Ordering {
        if reverse {
            other.cmp(self)
        } else {
            self.cmp(other)
        }
    }
}

/// Individual record field with associated key type
///
/// Each field marker type implements this trait to name the field it reads
/// and to parse stored values into its key type.
pub trait RecordField: Copy + Clone + Send + Sync + 'static {
    /// The type of key extracted for this field
    type Key: SortKey;

    /// Field name inside the record
    const ID: &'static str;

    /// Parse a stored value, or explain why it is not a valid key
    fn parse(value: &FieldValue) -> std::result::Result<Self::Key, String>;

    /// Extract the key of the record at position `index` of a sequence
    fn extract_key(self, index: usize, record: &Record) -> Result<Self::Key> {
        let value = record.get(Self::ID).ok_or(OrderingError::MissingField {
            index,
            field: Self::ID,
        })?;

        Self::parse(value).map_err(|reason| OrderingError::InvalidKey {
            index,
            field: Self::ID,
            value: value.to_string(),
            reason,
        })
    }
}

/// Extract one key per record, failing on the first record without a valid key
///
/// Nothing is reordered here, so callers can extract up front and only start
/// moving records once every key is known to be valid.
pub fn extract_keys<F: RecordField>(
    field: F,
    records: &[Record],
) -> Result<Vec<F::Key>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| field.extract_key(index, record))
        .collect()
}
