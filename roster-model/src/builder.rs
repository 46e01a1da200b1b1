//! Builder for records in the shape the add-entry flow produces.

use crate::fields;
use crate::record::{FieldValue, Record};

/// Assembles a [`Record`] with the well-known fields.
///
/// ```
/// use roster_model::RecordBuilder;
///
/// let record = RecordBuilder::new()
///     .id("17")
///     .name("Becker")
///     .first_name("Jana")
///     .email("jana@example.org")
///     .timestamp("2024-03-01 08:15:00")
///     .build();
///
/// assert_eq!(record.name(), Some("Becker"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(self, id: impl Into<FieldValue>) -> Self {
        self.field(fields::ID, id)
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.field(fields::NAME, name.into())
    }

    pub fn first_name(self, first_name: impl Into<String>) -> Self {
        self.field(fields::FIRST_NAME, first_name.into())
    }

    pub fn email(self, email: impl Into<String>) -> Self {
        self.field(fields::EMAIL, email.into())
    }

    /// Store a timestamp verbatim. No format check happens here.
    pub fn timestamp(self, timestamp: impl Into<String>) -> Self {
        self.field(fields::TIMESTAMP, timestamp.into())
    }

    /// Store `at` rendered in [`fields::TIMESTAMP_FORMAT`].
    #[cfg(feature = "chrono")]
    pub fn timestamp_at(self, at: chrono::NaiveDateTime) -> Self {
        let rendered = at.format(fields::TIMESTAMP_FORMAT).to_string();
        self.timestamp(rendered)
    }

    /// Stamp the record with the current local time.
    #[cfg(feature = "chrono")]
    pub fn stamped_now(self) -> Self {
        self.timestamp_at(chrono::Local::now().naive_local())
    }

    /// Set an arbitrary field.
    pub fn field(
        mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Self {
        self.record.insert(field, value);
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}
