//! Port contracts for to-do item management.
//!
//! Ports define infrastructure-agnostic interfaces used by the manager.

pub mod store;

pub use store::{ToDoStore, ToDoStoreError, ToDoStoreResult};
