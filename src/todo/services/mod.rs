//! Application services for to-do management.

mod manager;

pub use manager::{ToDoManager, ToDoManagerError, ToDoManagerResult, ToDoRequest};
