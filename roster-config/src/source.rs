//! Record source backed by a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use roster_core::{OrderingError, Record, RecordSource};
use tracing::debug;

/// Reads a JSON array of flat record objects on every fetch.
///
/// The given name is stored under `vorname`, as the provider writes it.
/// Values of any JSON shape are kept; only the fields an ordering reads
/// must hold a usable key.
///
/// ```json
/// [{"id": "3", "name": "Fischer", "vorname": "Lena",
///   "email": "lena@example.org", "timestamp": "2024-01-01 10:00:00"}]
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source reading the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file records are read from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn fetch(&self) -> roster_core::Result<Vec<Record>> {
        let contents = fs::read_to_string(&self.path).map_err(|err| {
            OrderingError::Source(format!(
                "failed to read {}: {err}",
                self.path.display()
            ))
        })?;

        let records: Vec<Record> =
            serde_json::from_str(&contents).map_err(|err| {
                OrderingError::Source(format!(
                    "invalid records in {}: {err}",
                    self.path.display()
                ))
            })?;

        debug!(
            path = %self.path.display(),
            records = records.len(),
            "loaded records"
        );
        Ok(records)
    }
}
