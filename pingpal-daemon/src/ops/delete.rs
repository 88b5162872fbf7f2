use pingpal_types::{Ping, RecordId, Task};

use crate::store::Store;

#[tracing::instrument(skip(store), err(Debug))]
pub async fn delete_task(store: &dyn Store<Task>, id: RecordId) -> anyhow::Result<Option<Task>> {
    let task = store.remove(id).await?;
    if task.is_none() {
        tracing::debug!("Task {id} was already gone");
    }

    Ok(task)
}

#[tracing::instrument(skip(store), err(Debug))]
pub async fn delete_ping(store: &dyn Store<Ping>, id: RecordId) -> anyhow::Result<Option<Ping>> {
    let ping = store.remove(id).await?;
    if ping.is_none() {
        tracing::debug!("Ping {id} was already gone");
    }

    Ok(ping)
}
