//! `PostgreSQL` store implementation for to-do items.

use super::{
    models::{NewToDoRow, ToDoChangeset, ToDoRow},
    schema::todo_items,
};
use crate::todo::{
    domain::{
        Description, NewToDoItem, PercentageDone, PersistedToDoData, Title, ToDoId, ToDoItem,
    },
    ports::{ToDoStore, ToDoStoreError, ToDoStoreResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by to-do adapters.
pub type ToDoPgPool = Pool<ConnectionManager<PgConnection>>;

/// DDL creating the `todo_items` table.
pub const CREATE_TODO_ITEMS_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_todo_items/up.sql");

/// Applies the `todo_items` schema. The DDL is idempotent.
///
/// # Errors
///
/// Returns [`ToDoStoreError::Persistence`] when a connection cannot be
/// obtained or the DDL fails.
pub async fn apply_schema(pool: &ToDoPgPool) -> ToDoStoreResult<()> {
    let shared = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = shared.get().map_err(ToDoStoreError::persistence)?;
        connection
            .batch_execute(CREATE_TODO_ITEMS_SQL)
            .map_err(ToDoStoreError::persistence)
    })
    .await
    .map_err(ToDoStoreError::persistence)?
}

/// `PostgreSQL`-backed to-do store.
#[derive(Debug, Clone)]
pub struct PostgresToDoStore {
    pool: ToDoPgPool,
}

impl PostgresToDoStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ToDoPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ToDoStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ToDoStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ToDoStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ToDoStoreError::persistence)?
    }
}

#[async_trait]
impl ToDoStore for PostgresToDoStore {
    async fn insert(&self, item: &NewToDoItem) -> ToDoStoreResult<ToDoId> {
        let new_row = to_new_row(item);
        self.run_blocking(move |connection| {
            diesel::insert_into(todo_items::table)
                .values(&new_row)
                .returning(todo_items::id)
                .get_result::<i64>(connection)
                .map(ToDoId::new)
                .map_err(ToDoStoreError::persistence)
        })
        .await
    }

    async fn find_by_id(&self, id: ToDoId) -> ToDoStoreResult<Option<ToDoItem>> {
        self.run_blocking(move |connection| {
            let row = todo_items::table
                .find(id.value())
                .select(ToDoRow::as_select())
                .first::<ToDoRow>(connection)
                .optional()
                .map_err(ToDoStoreError::persistence)?;
            row.map(row_to_item).transpose()
        })
        .await
    }

    async fn find_all(&self) -> ToDoStoreResult<Vec<ToDoItem>> {
        self.run_blocking(|connection| {
            let rows = todo_items::table
                .order(todo_items::id.asc())
                .select(ToDoRow::as_select())
                .load::<ToDoRow>(connection)
                .map_err(ToDoStoreError::persistence)?;
            rows.into_iter().map(row_to_item).collect()
        })
        .await
    }

    async fn find_by_expiration_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        done: Option<bool>,
    ) -> ToDoStoreResult<Vec<ToDoItem>> {
        self.run_blocking(move |connection| {
            let mut query = todo_items::table
                .filter(todo_items::expiration.between(start, end))
                .order(todo_items::id.asc())
                .select(ToDoRow::as_select())
                .into_boxed();
            if let Some(flag) = done {
                query = query.filter(todo_items::is_done.eq(flag));
            }
            let rows = query
                .load::<ToDoRow>(connection)
                .map_err(ToDoStoreError::persistence)?;
            rows.into_iter().map(row_to_item).collect()
        })
        .await
    }

    async fn save(&self, item: &ToDoItem) -> ToDoStoreResult<()> {
        let id = item.id();
        let changeset = to_changeset(item);
        self.run_blocking(move |connection| {
            let affected = diesel::update(todo_items::table.find(id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(ToDoStoreError::persistence)?;
            if affected == 0 {
                return Err(ToDoStoreError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn remove(&self, id: ToDoId) -> ToDoStoreResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(todo_items::table.find(id.value()))
                .execute(connection)
                .map_err(ToDoStoreError::persistence)?;
            if affected == 0 {
                return Err(ToDoStoreError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn percentage_column(percentage: PercentageDone) -> i16 {
    i16::from(percentage.value())
}

fn to_new_row(item: &NewToDoItem) -> NewToDoRow {
    let content = item.content();
    NewToDoRow {
        title: content.title().as_str().to_owned(),
        description: content.description().as_str().to_owned(),
        percentage_done: percentage_column(content.percentage_done()),
        created_at: item.created_at(),
        expiration: content.expiration(),
        is_done: false,
    }
}

fn to_changeset(item: &ToDoItem) -> ToDoChangeset {
    ToDoChangeset {
        title: item.title().as_str().to_owned(),
        description: item.description().as_str().to_owned(),
        percentage_done: percentage_column(item.percentage_done()),
        expiration: item.expiration(),
        is_done: item.is_done(),
    }
}

fn row_to_item(row: ToDoRow) -> ToDoStoreResult<ToDoItem> {
    let ToDoRow {
        id,
        title,
        description,
        percentage_done,
        created_at,
        expiration,
        is_done,
    } = row;

    let data = PersistedToDoData {
        id: ToDoId::new(id),
        title: Title::new(title).map_err(ToDoStoreError::persistence)?,
        description: Description::new(description).map_err(ToDoStoreError::persistence)?,
        percentage_done: PercentageDone::new(i32::from(percentage_done))
            .map_err(ToDoStoreError::persistence)?,
        created_at,
        expiration,
        is_done,
    };
    Ok(ToDoItem::from_persisted(data))
}
