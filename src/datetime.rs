//! Date/time utilities for anonboard.
//!
//! Timestamps are stored as integer microseconds since the Unix epoch so
//! that ordering in SQL is exact and values survive a round trip unchanged.

use chrono::{DateTime, Utc};

/// Current time, truncated to microsecond precision.
pub fn now() -> DateTime<Utc> {
    from_micros(Utc::now().timestamp_micros())
}

/// Convert a timestamp to microseconds since the Unix epoch.
pub fn to_micros(dt: &DateTime<Utc>) -> i64 {
    dt.timestamp_micros()
}

/// Convert microseconds since the Unix epoch to a timestamp.
///
/// Out-of-range values fall back to the epoch.
pub fn from_micros(micros: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_micros(micros).unwrap_or_default()
}
