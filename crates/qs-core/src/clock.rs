//! Timestamps at storage precision.

use chrono::{DateTime, Utc};

/// The current time truncated to whole milliseconds.
///
/// Records are stored as epoch milliseconds, so a fresh record compares
/// equal to itself after a save and reload.
pub(crate) fn now() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
