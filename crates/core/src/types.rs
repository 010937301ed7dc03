/// Numeric record ids (projects) are 64-bit.
pub type NumericId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
