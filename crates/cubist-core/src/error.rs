//! Error types for the conversion pipeline.

/// Errors raised while validating the uploaded document's fields.
///
/// Messages are user-facing and name the missing or invalid field.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required field `name`")]
    MissingName,

    #[error("field `name` must not be empty")]
    EmptyName,

    #[error("missing required field `data.s.colorBalance`")]
    MissingColorBalance,

    #[error("`colorBalance` needs at least {needed} entries, found {found}")]
    NotEnoughBalanceEntries { needed: usize, found: usize },

    #[error("`colorBalance[{index}]` is not a number")]
    NonNumericBalanceEntry { index: usize },

    #[error("LUT size must be at least 2, got {size}")]
    SizeTooSmall { size: u32 },
}

/// Invariant violations caught during `.cube` serialization.
///
/// These signal a programming defect rather than bad user input, but
/// they are still reported to the caller instead of panicking.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("grid holds {found} entries, expected {expected} for size {size}")]
    GridSizeMismatch {
        size: u32,
        expected: usize,
        found: usize,
    },

    #[error("LUT title must not be empty")]
    EmptyTitle,
}

/// Top-level error for the byte-to-document conversion boundary.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The uploaded bytes are not a valid JSON document.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document is valid JSON but fails field validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The generated grid violated a serialization invariant.
    #[error(transparent)]
    Serialize(#[from] SerializeError),
}
