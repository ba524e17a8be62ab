/// Registry identifiers are prefixed strings such as `ppt_001`.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
