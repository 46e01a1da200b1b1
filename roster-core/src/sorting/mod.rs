//! Sorting module for record ordering
//!
//! This module provides:
//! - Core traits for sort keys and record fields
//! - Field marker types tying a record field to its key type
//! - Sort key extraction and comparison
//! - Strategy pattern for the comparison sorts and the shuffle
//! - The instrumented heap sort engine

pub mod fields;
pub mod heap;
pub mod keys;
pub mod ops;
pub mod shuffle;
pub mod strategy;
pub mod traits;
pub mod utils;

#[cfg(test)]
mod tests;

pub use fields::*;
pub use heap::HeapSortEngine;
pub use keys::*;
pub use ops::{shuffle, sort_by_heap, sort_by_name, sort_by_timestamp};
pub use shuffle::RandomOrder;
pub use strategy::*;
pub use traits::*;
