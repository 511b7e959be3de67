use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::JournalEntryId;

/// An immutable free-text log entry, optionally with an attached image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Auto-assigned identifier.
    pub id: JournalEntryId,
    /// Entry text.
    pub content: String,
    /// Opaque image payload (for example a data URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Creation time, stored as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// A new entry created now.
    pub fn new(id: JournalEntryId, content: impl Into<String>, image: Option<String>) -> Self {
        Self {
            id,
            content: content.into(),
            image,
            created_at: crate::clock::now(),
        }
    }
}
