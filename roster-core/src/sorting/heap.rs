//! Instrumented binary max-heap sort
//!
//! The sequence is treated as an implicit binary tree: index `i` has children
//! `2i + 1` and `2i + 2`. The build phase heapifies every inner node from the
//! last one up to the root; the extraction phase repeatedly swaps the root
//! (the current maximum) behind a shrinking boundary and heapifies again.
//!
//! Every heapify invocation counts as one step, including each descent into
//! a child subtree after a swap. Top-level invocations from the two phases
//! are also counted separately as passes.

use super::fields::IdField;
use super::traits::extract_keys;
use crate::Result;
use roster_model::Record;
use tracing::debug;

/// Heap sort over records keyed by numeric id, with step counting
///
/// The counters belong to the engine value. `sort` takes `&mut self`, so one
/// engine cannot serve two sorts at once; use one engine per call or guard a
/// shared one with a lock.
#[derive(Debug, Default, Clone)]
pub struct HeapSortEngine {
    steps: usize,
    passes: usize,
}

impl HeapSortEngine {
    /// Engine with both counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort `records` ascending by `id`, returning the step count
    ///
    /// Fails before moving anything if any record lacks an integer `id`.
    pub fn sort(&mut self, records: &mut [Record]) -> Result<usize> {
        self.reset();
        let mut keys = extract_keys(IdField, records)?;
        let steps = self.sort_keyed(&mut keys, records);

        debug!(
            records = records.len(),
            steps,
            passes = self.passes,
            "heap sort finished"
        );
        Ok(steps)
    }

    /// Sort `items` ascending by the parallel `keys` slice
    ///
    /// `keys[i]` is the key of `items[i]`; both slices are permuted together.
    /// Resets the counters and returns the step count.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length.
    pub fn sort_keyed<K: Ord, T>(
        &mut self,
        keys: &mut [K],
        items: &mut [T],
    ) -> usize {
        assert_eq!(
            keys.len(),
            items.len(),
            "every item needs exactly one key"
        );
        self.reset();
        let n = items.len();

        for i in (0..n / 2).rev() {
            self.passes += 1;
            self.heapify(keys, items, n, i);
        }

        for i in (1..n).rev() {
            keys.swap(0, i);
            items.swap(0, i);
            self.passes += 1;
            self.heapify(keys, items, i, 0);
        }

        self.steps
    }

    fn heapify<K: Ord, T>(
        &mut self,
        keys: &mut [K],
        items: &mut [T],
        boundary: usize,
        root: usize,
    ) {
        self.steps += 1;

        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < boundary && keys[left] > keys[largest] {
            largest = left;
        }
        if right < boundary && keys[right] > keys[largest] {
            largest = right;
        }

        if largest != root {
            keys.swap(root, largest);
            items.swap(root, largest);
            self.heapify(keys, items, boundary, largest);
        }
    }

    /// Heapify invocations performed by the most recent sort
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// Top-level heapify invocations (build plus extraction) of the most
    /// recent sort. Never more than `n / 2 + n - 1`.
    pub fn pass_count(&self) -> usize {
        self.passes
    }

    /// Zero both counters
    pub fn reset(&mut self) {
        self.steps = 0;
        self.passes = 0;
    }
}
