//! Error types for to-do domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing validated to-do values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ToDoDomainError {
    /// The title is empty after trimming.
    #[error("title is required")]
    EmptyTitle,

    /// The title exceeds the maximum length.
    #[error("title must be at most {max} characters, got {actual}")]
    TitleTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Supplied length in characters.
        actual: usize,
    },

    /// The description is empty after trimming.
    #[error("description is required")]
    EmptyDescription,

    /// The description exceeds the maximum length.
    #[error("description must be at most {max} characters, got {actual}")]
    DescriptionTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Supplied length in characters.
        actual: usize,
    },

    /// The completion percentage is outside `0..=100`.
    #[error("percentage done must be between 0 and 100, got {0}")]
    PercentageOutOfRange(i32),

    /// The expiration is not strictly after the time of the write.
    #[error("expiration must be a future date")]
    ExpirationNotInFuture,
}

/// Error returned while parsing a named incoming range.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown incoming range: {0}")]
pub struct ParseIncomingRangeError(pub String);
