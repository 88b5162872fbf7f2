use std::collections::BTreeMap;

use anyhow::bail;
use async_trait::async_trait;
use pingpal_types::RecordId;
use tokio::sync::RwLock;

use super::{Record, Store};

/// Process-lifetime store keyed by id.
///
/// Records are kept keyed by id, so listing follows id order.
pub struct MemoryStore<R> {
    records: RwLock<BTreeMap<RecordId, R>>,
}

impl<R> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> Store<R> for MemoryStore<R> {
    async fn list(&self) -> anyhow::Result<Vec<R>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn insert(&self, record: R) -> anyhow::Result<R> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id()) {
            bail!("Record {} already exists", record.id());
        }

        records.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn remove(&self, id: RecordId) -> anyhow::Result<Option<R>> {
        Ok(self.records.write().await.remove(&id))
    }
}
