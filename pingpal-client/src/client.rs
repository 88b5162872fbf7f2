use anyhow::bail;
use pingpal_types::{
    CreatePing, CreateTask, DeleteRecord, DeleteResponse, Ping, RecordId, Task,
};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

#[derive(Debug)]
pub struct PingPalClient {
    endpoints: Vec<Url>,
    http_client: reqwest::Client,
}

impl PingPalClient {
    pub fn new(endpoints: Vec<Url>) -> anyhow::Result<Self> {
        Ok(Self {
            endpoints,
            http_client: reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(3))
                .timeout(Duration::from_secs(3))
                .build()?,
        })
    }

    async fn execute<T, F>(&self, make_request: F) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
        F: Fn(Url) -> RequestBuilder,
    {
        for url in &self.endpoints {
            let request = make_request(url.clone()).build()?;

            let Ok(response) = self.http_client.execute(request).await else {
                tracing::debug!("Endpoint {url} did not answer, trying the next one");
                continue;
            };

            if !response.status().is_success() {
                bail!("{}", response.text().await?)
            }

            return Ok(response.json().await?);
        }

        bail!("All API endpoints are dead");
    }

    fn request<B: serde::Serialize>(
        &self,
        method: Method,
        mut url: Url,
        path: &str,
        body: Option<&B>,
    ) -> RequestBuilder {
        url.set_path(path);
        let builder = self.http_client.request(method, url);
        match body {
            Some(body) => builder.json(body),
            None => builder,
        }
    }

    pub async fn list_tasks(&self) -> anyhow::Result<Vec<Task>> {
        self.execute(|url| self.request::<()>(Method::GET, url, "/api/tasks", None))
            .await
    }

    pub async fn create_task(&self, text: String) -> anyhow::Result<Task> {
        let payload = CreateTask { text };
        self.execute(|url| self.request(Method::POST, url, "/api/tasks", Some(&payload)))
            .await
    }

    pub async fn delete_task(&self, id: RecordId) -> anyhow::Result<RecordId> {
        let payload = DeleteRecord { id };
        self.execute::<DeleteResponse, _>(|url| {
            self.request(Method::DELETE, url, "/api/tasks", Some(&payload))
        })
        .await?;
        Ok(id)
    }

    pub async fn list_pings(&self) -> anyhow::Result<Vec<Ping>> {
        self.execute(|url| self.request::<()>(Method::GET, url, "/api/pings", None))
            .await
    }

    pub async fn create_ping(&self, text: String, minutes: u32) -> anyhow::Result<Ping> {
        let payload = CreatePing::in_minutes(text, minutes);
        self.execute(|url| self.request(Method::POST, url, "/api/pings", Some(&payload)))
            .await
    }

    pub async fn delete_ping(&self, id: RecordId) -> anyhow::Result<RecordId> {
        let payload = DeleteRecord { id };
        self.execute::<DeleteResponse, _>(|url| {
            self.request(Method::DELETE, url, "/api/pings", Some(&payload))
        })
        .await?;
        Ok(id)
    }
}
