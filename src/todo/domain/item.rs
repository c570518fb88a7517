//! To-do item aggregate and the validated content written by callers.

use super::{Description, PercentageDone, Title, ToDoDomainError, ToDoId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Caller-editable fields of a to-do item, validated as a unit.
///
/// Create and update both replace exactly these four fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToDoContent {
    title: Title,
    description: Description,
    percentage_done: PercentageDone,
    expiration: DateTime<Utc>,
}

impl ToDoContent {
    /// Validates raw input against the item invariants.
    ///
    /// Checks run in a fixed order (title, description, percentage,
    /// expiration) and the first violation is returned.
    ///
    /// # Errors
    ///
    /// Returns the [`ToDoDomainError`] describing the first rule violated.
    /// [`ToDoDomainError::ExpirationNotInFuture`] is returned when
    /// `expiration` is not strictly later than `now`.
    pub fn validate(
        title: impl Into<String>,
        description: impl Into<String>,
        percentage_done: i32,
        expiration: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Self, ToDoDomainError> {
        let title = Title::new(title)?;
        let description = Description::new(description)?;
        let percentage_done = PercentageDone::new(percentage_done)?;
        if expiration <= now {
            return Err(ToDoDomainError::ExpirationNotInFuture);
        }
        Ok(Self {
            title,
            description,
            percentage_done,
            expiration,
        })
    }

    /// Returns the validated title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the validated description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the validated completion percentage.
    #[must_use]
    pub const fn percentage_done(&self) -> PercentageDone {
        self.percentage_done
    }

    /// Returns the expiration timestamp.
    #[must_use]
    pub const fn expiration(&self) -> DateTime<Utc> {
        self.expiration
    }
}

/// A validated item that has not yet been assigned an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewToDoItem {
    content: ToDoContent,
    created_at: DateTime<Utc>,
}

impl NewToDoItem {
    /// Stamps validated content with the current clock time.
    #[must_use]
    pub fn new(content: ToDoContent, clock: &impl Clock) -> Self {
        Self {
            content,
            created_at: clock.utc(),
        }
    }

    /// Returns the validated content.
    #[must_use]
    pub const fn content(&self) -> &ToDoContent {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Materializes the stored item once the store has assigned `id`.
    ///
    /// New items are never done.
    #[must_use]
    pub fn into_item(self, id: ToDoId) -> ToDoItem {
        let ToDoContent {
            title,
            description,
            percentage_done,
            expiration,
        } = self.content;
        ToDoItem {
            id,
            title,
            description,
            percentage_done,
            created_at: self.created_at,
            expiration,
            is_done: false,
        }
    }
}

/// Stored to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDoItem {
    id: ToDoId,
    title: Title,
    description: Description,
    percentage_done: PercentageDone,
    created_at: DateTime<Utc>,
    expiration: DateTime<Utc>,
    is_done: bool,
}

/// Parameter object for reconstructing a persisted item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedToDoData {
    /// Persisted identifier.
    pub id: ToDoId,
    /// Persisted title.
    pub title: Title,
    /// Persisted description.
    pub description: Description,
    /// Persisted completion percentage.
    pub percentage_done: PercentageDone,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted expiration timestamp.
    pub expiration: DateTime<Utc>,
    /// Persisted completion flag.
    pub is_done: bool,
}

impl ToDoItem {
    /// Reconstructs an item from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedToDoData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            percentage_done: data.percentage_done,
            created_at: data.created_at,
            expiration: data.expiration,
            is_done: data.is_done,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ToDoId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn percentage_done(&self) -> PercentageDone {
        self.percentage_done
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the expiration timestamp.
    #[must_use]
    pub const fn expiration(&self) -> DateTime<Utc> {
        self.expiration
    }

    /// Returns `true` once the item has been marked completed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.is_done
    }

    /// Replaces the caller-editable fields.
    ///
    /// Identifier, creation time and completion flag are left untouched.
    pub fn revise(&mut self, content: ToDoContent) {
        self.title = content.title;
        self.description = content.description;
        self.percentage_done = content.percentage_done;
        self.expiration = content.expiration;
    }

    /// Overwrites the completion percentage without touching `is_done`.
    pub const fn set_percentage_done(&mut self, percentage_done: PercentageDone) {
        self.percentage_done = percentage_done;
    }

    /// Marks the item done at 100 percent.
    pub const fn mark_completed(&mut self) {
        self.is_done = true;
        self.percentage_done = PercentageDone::COMPLETE;
    }
}
