//! Service layer validating to-do writes and answering item queries.

use crate::todo::{
    domain::{
        ExpirationWindow, IncomingQuery, IncomingRange, NewToDoItem, PercentageDone, ToDoContent,
        ToDoDomainError, ToDoId, ToDoItem,
    },
    ports::{ToDoStore, ToDoStoreError},
};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload carrying the caller-editable fields of an item.
///
/// Used by both [`ToDoManager::create`] and [`ToDoManager::update`]. The
/// percentage is held as a signed integer so out-of-range input reaches
/// validation instead of being rejected by the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToDoRequest {
    title: String,
    description: String,
    expiration: DateTime<Utc>,
    percentage_done: i32,
}

impl ToDoRequest {
    /// Creates a request with a completion percentage of zero.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        expiration: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            expiration,
            percentage_done: i32::from(PercentageDone::NONE.value()),
        }
    }

    /// Sets the completion percentage.
    #[must_use]
    pub const fn with_percentage_done(mut self, percentage_done: i32) -> Self {
        self.percentage_done = percentage_done;
        self
    }
}

/// Service-level errors for to-do operations.
#[derive(Debug, Error)]
pub enum ToDoManagerError {
    /// The referenced item does not exist.
    #[error("to-do item with id {0} not found")]
    NotFound(ToDoId),
    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] ToDoDomainError),
    /// The store failed for a reason other than a missing item.
    #[error(transparent)]
    Store(ToDoStoreError),
}

impl ToDoManagerError {
    /// Returns `true` for [`ToDoManagerError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` for [`ToDoManagerError::Validation`].
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<ToDoStoreError> for ToDoManagerError {
    fn from(err: ToDoStoreError) -> Self {
        match err {
            ToDoStoreError::NotFound(id) => Self::NotFound(id),
            other @ ToDoStoreError::Persistence(_) => Self::Store(other),
        }
    }
}

/// Result type for to-do manager operations.
pub type ToDoManagerResult<T> = Result<T, ToDoManagerError>;

/// To-do orchestration service.
///
/// Holds the store and clock it was given; there is no ambient state.
/// Named ranges are evaluated against calendar dates in
/// [`ToDoManager::reference_offset`], UTC unless configured otherwise.
#[derive(Clone)]
pub struct ToDoManager<S, C>
where
    S: ToDoStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    reference_offset: FixedOffset,
}

impl<S, C> ToDoManager<S, C>
where
    S: ToDoStore,
    C: Clock + Send + Sync,
{
    /// Creates a manager evaluating named ranges in UTC.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            reference_offset: Utc.fix(),
        }
    }

    /// Sets the offset used to derive calendar dates for named ranges.
    #[must_use]
    pub const fn with_reference_offset(mut self, offset: FixedOffset) -> Self {
        self.reference_offset = offset;
        self
    }

    /// Returns the offset used to derive calendar dates for named ranges.
    #[must_use]
    pub const fn reference_offset(&self) -> FixedOffset {
        self.reference_offset
    }

    /// Validates and persists a new item.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoManagerError::Validation`] when the request breaks an
    /// item invariant, in which case nothing is stored, or
    /// [`ToDoManagerError::Store`] when persistence fails.
    pub async fn create(&self, request: ToDoRequest) -> ToDoManagerResult<ToDoId> {
        let content = self.validate(request)?;
        let new_item = NewToDoItem::new(content, &*self.clock);
        let id = self.store.insert(&new_item).await?;
        info!(todo_id = %id, "created to-do item");
        Ok(id)
    }

    /// Returns the item with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoManagerError::NotFound`] when no such item exists.
    pub async fn get_by_id(&self, id: ToDoId) -> ToDoManagerResult<ToDoItem> {
        self.require(id).await
    }

    /// Returns every stored item.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoManagerError::Store`] when the lookup fails.
    pub async fn get_all(&self) -> ToDoManagerResult<Vec<ToDoItem>> {
        let items = self.store.find_all().await?;
        debug!(count = items.len(), "listed to-do items");
        Ok(items)
    }

    /// Returns the items matching an incoming query.
    ///
    /// Named ranges only return items that are not done. An explicit range
    /// returns every item expiring within it, bounds included; a reversed
    /// range yields nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoManagerError::Store`] when the lookup fails.
    pub async fn get_incoming(&self, query: IncomingQuery) -> ToDoManagerResult<Vec<ToDoItem>> {
        let (candidate, done) = match query {
            IncomingQuery::Named(range) => (
                range.window(self.clock.utc(), self.reference_offset),
                Some(false),
            ),
            IncomingQuery::Between { start, end } => (ExpirationWindow::new(start, end), None),
        };
        let Some(window) = candidate else {
            debug!(?query, "incoming query covers no instants");
            return Ok(Vec::new());
        };
        let items = self
            .store
            .find_by_expiration_range(window.start(), window.end(), done)
            .await?;
        debug!(?query, count = items.len(), "listed incoming to-do items");
        Ok(items)
    }

    /// Returns the items for a named range given in string form.
    ///
    /// Unrecognized names produce an empty result rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoManagerError::Store`] when the lookup fails.
    pub async fn get_incoming_named(&self, range: &str) -> ToDoManagerResult<Vec<ToDoItem>> {
        match IncomingRange::try_from(range) {
            Ok(parsed) => self.get_incoming(IncomingQuery::Named(parsed)).await,
            Err(err) => {
                debug!(%err, "ignoring unrecognized incoming range");
                Ok(Vec::new())
            }
        }
    }

    /// Replaces the editable fields of an existing item.
    ///
    /// The identifier is checked before the payload, so a missing item is
    /// reported as not found even when the payload is also invalid.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoManagerError::NotFound`] when the item does not exist,
    /// [`ToDoManagerError::Validation`] when the request is invalid, or
    /// [`ToDoManagerError::Store`] when persistence fails.
    pub async fn update(&self, id: ToDoId, request: ToDoRequest) -> ToDoManagerResult<ToDoItem> {
        let mut item = self.require(id).await?;
        let content = self.validate(request)?;
        item.revise(content);
        self.store.save(&item).await?;
        info!(todo_id = %id, "updated to-do item");
        Ok(item)
    }

    /// Overwrites the completion percentage of an item.
    ///
    /// The done flag is left as it is.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoManagerError::NotFound`] when the item does not exist or
    /// [`ToDoManagerError::Validation`] when `percentage` is outside
    /// `0..=100`.
    pub async fn set_percentage_done(
        &self,
        id: ToDoId,
        percentage: i32,
    ) -> ToDoManagerResult<ToDoItem> {
        let mut item = self.require(id).await?;
        let percentage_done = PercentageDone::new(percentage).inspect_err(|err| {
            warn!(todo_id = %id, %err, "rejected percentage update");
        })?;
        item.set_percentage_done(percentage_done);
        self.store.save(&item).await?;
        info!(todo_id = %id, %percentage_done, "set to-do percentage");
        Ok(item)
    }

    /// Marks an item done at 100 percent.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoManagerError::NotFound`] when the item does not exist.
    pub async fn mark_completed(&self, id: ToDoId) -> ToDoManagerResult<ToDoItem> {
        let mut item = self.require(id).await?;
        item.mark_completed();
        self.store.save(&item).await?;
        info!(todo_id = %id, "marked to-do item completed");
        Ok(item)
    }

    /// Deletes an item permanently.
    ///
    /// # Errors
    ///
    /// Returns [`ToDoManagerError::NotFound`] when the item does not exist.
    pub async fn delete(&self, id: ToDoId) -> ToDoManagerResult<()> {
        self.require(id).await?;
        self.store.remove(id).await?;
        info!(todo_id = %id, "deleted to-do item");
        Ok(())
    }

    async fn require(&self, id: ToDoId) -> ToDoManagerResult<ToDoItem> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ToDoManagerError::NotFound(id))
    }

    fn validate(&self, request: ToDoRequest) -> ToDoManagerResult<ToDoContent> {
        let ToDoRequest {
            title,
            description,
            expiration,
            percentage_done,
        } = request;
        ToDoContent::validate(
            title,
            description,
            percentage_done,
            expiration,
            self.clock.utc(),
        )
        .inspect_err(|err| warn!(%err, "rejected to-do input"))
        .map_err(ToDoManagerError::from)
    }
}
