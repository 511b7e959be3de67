//! Error types for the campaign store.

use qs_core::{CoreError, FeatId, JournalEntryId, QuestId};

/// Result type for campaign operations.
pub type CampaignResult<T> = Result<T, CampaignError>;

/// Errors that can occur while reading or changing a campaign.
#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    /// The singleton character record is missing.
    #[error("character record not found")]
    CharacterNotFound,

    /// No quest with this id.
    #[error("quest not found: {0}")]
    QuestNotFound(QuestId),

    /// No journal entry with this id.
    #[error("journal entry not found: {0}")]
    JournalEntryNotFound(JournalEntryId),

    /// No feat with this id.
    #[error("feat not found: {0}")]
    FeatNotFound(FeatId),

    /// The quest has already been completed and cannot pay out again.
    #[error("quest {0} is already completed")]
    QuestAlreadyCompleted(QuestId),

    /// Input rejected before anything was written.
    #[error("validation error: {0}")]
    Validation(String),

    /// A transaction could not be committed; nothing was changed.
    #[error("transaction '{operation}' failed: {reason}")]
    Transaction {
        /// The operation that was being committed.
        operation: String,
        /// Why the commit failed.
        reason: String,
    },

    /// The stored document was written by a newer or unknown schema.
    #[error("unsupported schema version {0}")]
    UnsupportedSchema(u64),

    /// The stored document is not shaped like a campaign.
    #[error("corrupt campaign document: {0}")]
    CorruptDocument(String),

    /// Record-level validation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// (De)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CampaignError {
    /// Returns true for the "no such record" family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CharacterNotFound
                | Self::QuestNotFound(_)
                | Self::JournalEntryNotFound(_)
                | Self::FeatNotFound(_)
                | Self::Core(CoreError::SpellNotFound(_))
                | Self::Core(CoreError::UnknownSkill(_))
        )
    }
}
