//! In-memory store for to-do tests and embedding.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::todo::{
    domain::{ExpirationWindow, NewToDoItem, ToDoId, ToDoItem},
    ports::{ToDoStore, ToDoStoreError, ToDoStoreResult},
};

/// Thread-safe in-memory to-do store.
///
/// Identifiers are assigned sequentially from 1 and never reused, so a
/// deleted identifier stays absent.
#[derive(Debug, Clone, Default)]
pub struct InMemoryToDoStore {
    state: Arc<RwLock<InMemoryToDoState>>,
}

#[derive(Debug, Default)]
struct InMemoryToDoState {
    last_id: i64,
    items: BTreeMap<ToDoId, ToDoItem>,
}

impl InMemoryToDoStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ToDoStoreResult<RwLockReadGuard<'_, InMemoryToDoState>> {
        self.state
            .read()
            .map_err(|err| ToDoStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> ToDoStoreResult<RwLockWriteGuard<'_, InMemoryToDoState>> {
        self.state
            .write()
            .map_err(|err| ToDoStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl ToDoStore for InMemoryToDoStore {
    async fn insert(&self, item: &NewToDoItem) -> ToDoStoreResult<ToDoId> {
        let mut state = self.write()?;
        let next = state.last_id.checked_add(1).ok_or_else(|| {
            ToDoStoreError::persistence(std::io::Error::other("identifier space exhausted"))
        })?;
        state.last_id = next;
        let id = ToDoId::new(next);
        state.items.insert(id, item.clone().into_item(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: ToDoId) -> ToDoStoreResult<Option<ToDoItem>> {
        let state = self.read()?;
        Ok(state.items.get(&id).cloned())
    }

    async fn find_all(&self) -> ToDoStoreResult<Vec<ToDoItem>> {
        let state = self.read()?;
        Ok(state.items.values().cloned().collect())
    }

    async fn find_by_expiration_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        done: Option<bool>,
    ) -> ToDoStoreResult<Vec<ToDoItem>> {
        let Some(window) = ExpirationWindow::new(start, end) else {
            return Ok(Vec::new());
        };
        let state = self.read()?;
        Ok(state
            .items
            .values()
            .filter(|item| window.contains(item.expiration()))
            .filter(|item| done.is_none_or(|flag| item.is_done() == flag))
            .cloned()
            .collect())
    }

    async fn save(&self, item: &ToDoItem) -> ToDoStoreResult<()> {
        let mut state = self.write()?;
        let slot = state
            .items
            .get_mut(&item.id())
            .ok_or(ToDoStoreError::NotFound(item.id()))?;
        *slot = item.clone();
        Ok(())
    }

    async fn remove(&self, id: ToDoId) -> ToDoStoreResult<()> {
        let mut state = self.write()?;
        state
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(ToDoStoreError::NotFound(id))
    }
}
