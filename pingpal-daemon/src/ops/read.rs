use pingpal_types::{Ping, Task};

use crate::store::Store;

pub async fn list_tasks(store: &dyn Store<Task>) -> anyhow::Result<Vec<Task>> {
    store.list().await
}

pub async fn list_pings(store: &dyn Store<Ping>) -> anyhow::Result<Vec<Ping>> {
    store.list().await
}
