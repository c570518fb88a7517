//! `PostgreSQL` adapters for to-do persistence.

mod models;
mod schema;
mod store;

pub use store::{CREATE_TODO_ITEMS_SQL, PostgresToDoStore, ToDoPgPool, apply_schema};
