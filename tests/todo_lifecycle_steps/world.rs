//! Shared world state for to-do lifecycle BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use crate::todo_helpers::{FixedClock, reference_now};
use rstest::fixture;
use todo_keeper::todo::{
    adapters::memory::InMemoryToDoStore,
    domain::{ToDoId, ToDoItem},
    services::{ToDoManager, ToDoManagerError},
};

/// Manager type used by the BDD world.
pub type TestToDoManager = ToDoManager<InMemoryToDoStore, FixedClock>;

/// Scenario world for to-do lifecycle behaviour tests.
pub struct ToDoWorld {
    pub manager: TestToDoManager,
    pub ids_by_title: HashMap<String, ToDoId>,
    pub last_incoming: Vec<ToDoItem>,
    pub last_error: Option<ToDoManagerError>,
}

impl ToDoWorld {
    /// Creates a world whose clock is frozen at the reference instant.
    #[must_use]
    pub fn new() -> Self {
        let manager = ToDoManager::new(
            Arc::new(InMemoryToDoStore::new()),
            Arc::new(FixedClock(reference_now())),
        );

        Self {
            manager,
            ids_by_title: HashMap::new(),
            last_incoming: Vec::new(),
            last_error: None,
        }
    }

    /// Returns the identifier of an item created earlier in the scenario.
    pub fn id_for(&self, title: &str) -> Result<ToDoId, eyre::Report> {
        self.ids_by_title
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no item titled {title:?} in scenario world"))
    }
}

impl Default for ToDoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ToDoWorld {
    ToDoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
