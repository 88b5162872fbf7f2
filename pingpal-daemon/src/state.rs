use std::sync::Arc;

use pingpal_types::{Ping, Task};

use crate::store::{IdGenerator, MemoryStore, Store};

/// Shared handler state: both stores and the id source.
#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<dyn Store<Task>>,
    pub pings: Arc<dyn Store<Ping>>,
    pub ids: Arc<IdGenerator>,
}

impl AppState {
    pub fn new(tasks: Arc<dyn Store<Task>>, pings: Arc<dyn Store<Ping>>) -> Self {
        Self {
            tasks,
            pings,
            ids: Arc::new(IdGenerator::new()),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::<Task>::new()),
            Arc::new(MemoryStore::<Ping>::new()),
        )
    }
}
