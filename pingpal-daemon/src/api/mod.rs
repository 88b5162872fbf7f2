mod endpoints;
mod errors;

use crate::{api::endpoints::*, state::AppState};
use anyhow::Context;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::trace::{DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub fn router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
        .on_failure(DefaultOnFailure::new().level(Level::WARN));

    Router::new()
        .route(
            "/api/tasks",
            get(list_tasks_endpoint)
                .post(create_task_endpoint)
                .delete(delete_task_endpoint),
        )
        .route(
            "/api/pings",
            get(list_pings_endpoint)
                .post(create_ping_endpoint)
                .delete(delete_ping_endpoint),
        )
        .layer(trace_layer)
        .with_state(state)
}

#[tracing::instrument(skip_all)]
pub async fn run(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind address")?;
    tracing::info!("Listening at http://{addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to serve HTTP")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl-C, shutting down"),
        Err(error) => tracing::warn!("Failed to listen for Ctrl-C: {error}"),
    }
}
