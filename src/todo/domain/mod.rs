//! Domain model for to-do item management.
//!
//! Items, their validated content, and the calendar arithmetic behind the
//! incoming-item queries. Nothing here touches storage.

mod error;
mod ids;
mod item;
mod range;
mod values;

pub use error::{ParseIncomingRangeError, ToDoDomainError};
pub use ids::ToDoId;
pub use item::{NewToDoItem, PersistedToDoData, ToDoContent, ToDoItem};
pub use range::{ExpirationWindow, IncomingQuery, IncomingRange};
pub use values::{Description, PercentageDone, Title};
