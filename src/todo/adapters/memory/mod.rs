//! In-memory adapters for to-do persistence.

mod store;

pub use store::InMemoryToDoStore;
