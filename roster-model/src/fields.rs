//! Well-known field names and the canonical timestamp layout.

/// Numeric identifier, the heap-sort key. Providers may store it as text.
pub const ID: &str = "id";

/// Family name, the key for alphabetical ordering.
pub const NAME: &str = "name";

/// Given name, stored under the provider's `vorname` key. Passed through
/// unexamined.
pub const FIRST_NAME: &str = "vorname";

/// Contact address. Passed through unexamined.
pub const EMAIL: &str = "email";

/// Creation instant in [`TIMESTAMP_FORMAT`], the chronological ordering key.
pub const TIMESTAMP: &str = "timestamp";

/// `chrono` format string for stored timestamps (`yyyy-MM-dd HH:mm:ss`).
///
/// Zero padded and fixed width, so the textual and chronological orders agree
/// for every value that matches it.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
