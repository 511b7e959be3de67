//! Error types for the rules engine.

use qs_core::{Attribute, CoreError};

/// Errors that can occur while applying rules or building a character.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// A score was picked that has no unused copy left in the pool.
    #[error("score {0} is not available in the pool")]
    ScoreUnavailable(i32),

    /// Character creation was finished with unassigned attributes.
    #[error("attribute {0} has no score assigned")]
    Unassigned(Attribute),

    /// A pool of the wrong size was supplied.
    #[error("invalid pool: {0}")]
    InvalidPool(String),

    /// Record-level validation failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience result type for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;
