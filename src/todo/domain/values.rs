//! Validated scalar types for to-do item content.

use super::ToDoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-blank item title of at most [`Title::MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Maximum title length in characters.
    pub const MAX_CHARS: usize = 70;

    /// Creates a validated title.
    ///
    /// The text is kept verbatim; trimming only decides whether it is blank.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoDomainError::EmptyTitle`] when the value is blank or
    /// [`ToDoDomainError::TitleTooLong`] when it exceeds the limit.
    pub fn new(value: impl Into<String>) -> Result<Self, ToDoDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(ToDoDomainError::EmptyTitle);
        }
        let actual = raw.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(ToDoDomainError::TitleTooLong {
                max: Self::MAX_CHARS,
                actual,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Title {
    type Error = ToDoDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-blank item description of at most [`Description::MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Maximum description length in characters.
    pub const MAX_CHARS: usize = 500;

    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoDomainError::EmptyDescription`] when the value is blank
    /// or [`ToDoDomainError::DescriptionTooLong`] when it exceeds the limit.
    pub fn new(value: impl Into<String>) -> Result<Self, ToDoDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(ToDoDomainError::EmptyDescription);
        }
        let actual = raw.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(ToDoDomainError::DescriptionTooLong {
                max: Self::MAX_CHARS,
                actual,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the description text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Description {
    type Error = ToDoDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Completion percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct PercentageDone(u8);

impl PercentageDone {
    /// Percentage of an untouched item.
    pub const NONE: Self = Self(0);

    /// Percentage of a completed item.
    pub const COMPLETE: Self = Self(100);

    /// Creates a validated percentage.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoDomainError::PercentageOutOfRange`] when the value lies
    /// outside `0..=100`.
    pub fn new(value: i32) -> Result<Self, ToDoDomainError> {
        u8::try_from(value)
            .ok()
            .filter(|percentage| *percentage <= Self::COMPLETE.0)
            .map(Self)
            .ok_or(ToDoDomainError::PercentageOutOfRange(value))
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` when the percentage is 100.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.0 == Self::COMPLETE.0
    }
}

impl TryFrom<i32> for PercentageDone {
    type Error = ToDoDomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PercentageDone> for u8 {
    fn from(value: PercentageDone) -> Self {
        value.0
    }
}

impl fmt::Display for PercentageDone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
