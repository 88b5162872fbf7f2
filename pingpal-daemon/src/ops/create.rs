use chrono::{DateTime, Utc};
use pingpal_types::{Ping, Task};

use crate::store::{IdGenerator, Store};

#[tracing::instrument(skip(store, ids), err(Debug))]
pub async fn create_task(
    store: &dyn Store<Task>,
    ids: &IdGenerator,
    text: String,
) -> anyhow::Result<Task> {
    let task = Task::new(ids.next(), text);
    store.insert(task).await
}

/// Stores a new ping whose expiry has already been resolved.
#[tracing::instrument(skip(store, ids), err(Debug))]
pub async fn create_ping(
    store: &dyn Store<Ping>,
    ids: &IdGenerator,
    text: String,
    expires_at: DateTime<Utc>,
) -> anyhow::Result<Ping> {
    let ping = Ping::new(ids.next(), text, expires_at);
    store.insert(ping).await
}
