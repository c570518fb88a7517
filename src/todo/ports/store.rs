//! Store port for to-do persistence and expiration-range lookup.

use crate::todo::domain::{NewToDoItem, ToDoId, ToDoItem};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for store operations.
pub type ToDoStoreResult<T> = Result<T, ToDoStoreError>;

/// To-do persistence contract.
#[async_trait]
pub trait ToDoStore: Send + Sync {
    /// Persists a new item and returns the identifier assigned to it.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoStoreError::Persistence`] when the write fails.
    async fn insert(&self, item: &NewToDoItem) -> ToDoStoreResult<ToDoId>;

    /// Finds an item by identifier.
    ///
    /// Returns `None` when the item does not exist.
    async fn find_by_id(&self, id: ToDoId) -> ToDoStoreResult<Option<ToDoItem>>;

    /// Returns every stored item.
    async fn find_all(&self) -> ToDoStoreResult<Vec<ToDoItem>>;

    /// Returns items whose expiration lies within `[start, end]`.
    ///
    /// When `done` is `Some`, only items with a matching completion flag are
    /// returned.
    async fn find_by_expiration_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        done: Option<bool>,
    ) -> ToDoStoreResult<Vec<ToDoItem>>;

    /// Persists in-place changes to an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoStoreError::NotFound`] when the item no longer exists.
    async fn save(&self, item: &ToDoItem) -> ToDoStoreResult<()>;

    /// Removes an item permanently.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoStoreError::NotFound`] when the item does not exist.
    async fn remove(&self, id: ToDoId) -> ToDoStoreResult<()>;
}

/// Errors returned by store implementations.
#[derive(Debug, Clone, Error)]
pub enum ToDoStoreError {
    /// The item was not found.
    #[error("to-do item not found: {0}")]
    NotFound(ToDoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ToDoStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
