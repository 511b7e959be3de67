use crate::id::SpellId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while validating or patching records.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Two skills in the same list share a name.
    #[error("duplicate skill: \"{0}\"")]
    DuplicateSkill(String),

    /// A skill referenced by name does not exist on the character.
    #[error("unknown skill: \"{0}\"")]
    UnknownSkill(String),

    /// A spell referenced by id does not exist on the character.
    #[error("spell not found: {0}")]
    SpellNotFound(SpellId),

    /// A spell level outside 0-9.
    #[error("invalid spell level {0} (expected 0-9)")]
    InvalidSpellLevel(u8),

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
