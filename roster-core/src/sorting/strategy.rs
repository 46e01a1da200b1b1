//! Strategy pattern for record orderings
//!
//! Comparison sorts and the shuffle share one trait so the orchestrator can
//! hold any of them behind a box. The heap sort lives in [`super::heap`]
//! because it carries per-call instrumentation.

use super::traits::{RecordField, SortKey, extract_keys};
use super::utils::reorder_by_indices;
use crate::Result;
use roster_model::Record;

/// An ordering strategy over a record sequence
pub trait OrderingStrategy: Send + Sync {
    /// Reorder `records` in place
    ///
    /// On error the sequence is left exactly as it was passed in.
    fn apply(&self, records: &mut [Record]) -> Result<()>;

    /// Estimate the computational cost of this strategy
    fn cost_estimate(&self) -> SortCost;
}

/// Estimated cost of an ordering operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortCost {
    /// O(1) - already ordered or no-op
    Trivial,
    /// O(n) - single pass operation
    Cheap,
    /// O(n log n) - comparison sort
    Moderate,
}

/// Single field sort strategy
#[derive(Debug, Clone, Copy)]
pub struct FieldSort<F: RecordField> {
    /// Field the keys are read from
    pub field: F,
    /// Largest key first when set
    pub reverse: bool,
}

impl<F: RecordField> FieldSort<F> {
    /// Create a new field sort strategy
    pub fn new(field: F, reverse: bool) -> Self {
        Self { field, reverse }
    }
}

impl<F: RecordField> OrderingStrategy for FieldSort<F> {
    fn apply(&self, records: &mut [Record]) -> Result<()> {
        // Extract every key before moving anything
        let keys = extract_keys(self.field, records)?;

        let mut indices: Vec<usize> = (0..records.len()).collect();
        indices.sort_by(|&a, &b| {
            keys[a].compare_with_order(&keys[b], self.reverse)
        });

        reorder_by_indices(records, &indices);
        Ok(())
    }

    fn cost_estimate(&self) -> SortCost {
        SortCost::Moderate
    }
}
