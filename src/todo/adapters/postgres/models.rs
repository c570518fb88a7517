//! Diesel row models for to-do persistence.

use super::schema::todo_items;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for to-do records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todo_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ToDoRow {
    /// Surrogate identifier.
    pub id: i64,
    /// Item title.
    pub title: String,
    /// Item description.
    pub description: String,
    /// Completion percentage.
    pub percentage_done: i16,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Expiration timestamp.
    pub expiration: DateTime<Utc>,
    /// Completion flag.
    pub is_done: bool,
}

/// Insert model for to-do records. The identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todo_items)]
pub struct NewToDoRow {
    /// Item title.
    pub title: String,
    /// Item description.
    pub description: String,
    /// Completion percentage.
    pub percentage_done: i16,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Expiration timestamp.
    pub expiration: DateTime<Utc>,
    /// Completion flag.
    pub is_done: bool,
}

/// Update model covering every mutable column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todo_items)]
pub struct ToDoChangeset {
    /// Item title.
    pub title: String,
    /// Item description.
    pub description: String,
    /// Completion percentage.
    pub percentage_done: i16,
    /// Expiration timestamp.
    pub expiration: DateTime<Utc>,
    /// Completion flag.
    pub is_done: bool,
}
