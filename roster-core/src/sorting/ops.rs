//! One-call entry points for each ordering.

use super::fields::{NameField, TimestampField};
use super::heap::HeapSortEngine;
use super::shuffle::shuffle_with;
use super::strategy::{FieldSort, OrderingStrategy};
use crate::Result;
use roster_model::Record;

/// Heap sort `records` ascending by numeric `id`; returns the heapify step
/// count.
pub fn sort_by_heap(records: &mut [Record]) -> Result<usize> {
    HeapSortEngine::new().sort(records)
}

/// Sort by `name`, A-Z when `ascending`, Z-A otherwise.
pub fn sort_by_name(records: &mut [Record], ascending: bool) -> Result<()> {
    FieldSort::new(NameField, !ascending).apply(records)
}

/// Sort by `timestamp`, newest first.
pub fn sort_by_timestamp(records: &mut [Record]) -> Result<()> {
    FieldSort::new(TimestampField, true).apply(records)
}

/// Put `records` in uniformly random order.
pub fn shuffle(records: &mut [Record]) {
    shuffle_with(records, &mut rand::rng());
}
