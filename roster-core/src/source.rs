//! The provider side of the engine.

use roster_model::Record;

use crate::Result;

/// An external provider of records, such as a document store query.
///
/// The engine treats a source as opaque: it asks for the current records once
/// per ordering call and does no retrying of its own.
pub trait RecordSource {
    /// Fetch every record the source currently holds, in any order.
    fn fetch(&self) -> Result<Vec<Record>>;
}

impl RecordSource for [Record] {
    fn fetch(&self) -> Result<Vec<Record>> {
        Ok(self.to_vec())
    }
}

impl RecordSource for Vec<Record> {
    fn fetch(&self) -> Result<Vec<Record>> {
        self.as_slice().fetch()
    }
}
