//! Record data model shared across the roster crates.
//!
//! A [`Record`] is a flat, ordered mapping from field name to [`FieldValue`]
//! as handed over by an external record provider. The ordering engine in
//! `roster-core` reads keys out of records but never changes their contents.
#![allow(missing_docs)]

#[cfg(feature = "chrono")]
pub use ::chrono;

pub mod builder;
pub mod fields;
pub mod record;

pub use builder::RecordBuilder;
pub use fields::{EMAIL, FIRST_NAME, ID, NAME, TIMESTAMP, TIMESTAMP_FORMAT};
pub use record::{FieldValue, Record};
