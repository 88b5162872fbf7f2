mod ids;
mod memory;

pub use crate::store::{ids::*, memory::*};

use async_trait::async_trait;
use pingpal_types::{Ping, RecordId, Task};

/// A record that can live in a [`Store`].
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> RecordId;
}

impl Record for Task {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Ping {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Storage backend for one kind of record.
///
/// `list` returns records in id order, which is creation order.
#[async_trait]
pub trait Store<R: Record>: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<R>>;

    async fn insert(&self, record: R) -> anyhow::Result<R>;

    /// Removes the record with the given id, returning it if it existed.
    async fn remove(&self, id: RecordId) -> anyhow::Result<Option<R>>;
}
