//! Record ordering engine.
//!
//! Takes an unordered sequence of [`Record`]s and reorders it in place under
//! one of a closed set of [`OrderingMode`]s: heap sort by numeric id, name
//! ascending or descending, newest timestamp first, or a uniform shuffle.
//!
//! ```
//! use roster_core::{sort_by_heap, Record, RecordBuilder};
//!
//! let mut records: Vec<Record> = ["5", "3", "8"]
//!     .into_iter()
//!     .map(|id| RecordBuilder::new().id(id).build())
//!     .collect();
//!
//! let steps = sort_by_heap(&mut records).unwrap();
//! assert!(steps > 0);
//! assert_eq!(records[0].id().map(|v| v.to_string()).as_deref(), Some("3"));
//! ```

pub mod error;
pub mod orchestrator;
pub mod sorting;
pub mod source;

pub use error::{OrderingError, Result};
pub use orchestrator::{
    OrderingMode, OrderingOutcome, OrderingSettings, SortOrchestrator,
};
pub use roster_model::{FieldValue, Record, RecordBuilder};
pub use sorting::{
    HeapSortEngine, OrderingStrategy, RandomOrder, SortCost, shuffle,
    sort_by_heap, sort_by_name, sort_by_timestamp,
};
pub use source::RecordSource;
