use super::errors::{ApiError, ApiResult};
use crate::{
    ops::{create_ping, create_task, delete_ping, delete_task, list_pings, list_tasks},
    state::AppState,
};

use anyhow::Context;
use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use chrono::Utc;
use pingpal_types::{CreatePing, CreateTask, DeleteRecord, DeleteResponse, Ping, Task};

#[tracing::instrument(skip(state), err(Debug))]
pub async fn list_tasks_endpoint(State(state): State<AppState>) -> ApiResult<Vec<Task>> {
    let tasks = list_tasks(state.tasks.as_ref())
        .await
        .context("Failed to list tasks")?;

    Ok((StatusCode::OK, Json(tasks)))
}

#[tracing::instrument(skip(state), err(Debug))]
pub async fn create_task_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<CreateTask>,
) -> ApiResult<Task> {
    let task = create_task(state.tasks.as_ref(), &state.ids, payload.text)
        .await
        .context("Failed to create task")?;

    Ok((StatusCode::OK, Json(task)))
}

#[tracing::instrument(skip(state), err(Debug))]
pub async fn delete_task_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<DeleteRecord>,
) -> ApiResult<DeleteResponse> {
    delete_task(state.tasks.as_ref(), payload.id)
        .await
        .context(format!("Failed to delete task {}", payload.id))?;

    Ok((StatusCode::OK, Json(DeleteResponse::success())))
}

#[tracing::instrument(skip(state), err(Debug))]
pub async fn list_pings_endpoint(State(state): State<AppState>) -> ApiResult<Vec<Ping>> {
    let pings = list_pings(state.pings.as_ref())
        .await
        .context("Failed to list pings")?;

    Ok((StatusCode::OK, Json(pings)))
}

#[tracing::instrument(skip(state), err(Debug))]
pub async fn create_ping_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<CreatePing>,
) -> ApiResult<Ping> {
    let expires_at = payload
        .resolve_expiry(Utc::now())
        .map_err(ApiError::bad_request)?;

    let ping = create_ping(state.pings.as_ref(), &state.ids, payload.text, expires_at)
        .await
        .context("Failed to create ping")?;

    Ok((StatusCode::OK, Json(ping)))
}

#[tracing::instrument(skip(state), err(Debug))]
pub async fn delete_ping_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<DeleteRecord>,
) -> ApiResult<DeleteResponse> {
    delete_ping(state.pings.as_ref(), payload.id)
        .await
        .context(format!("Failed to delete ping {}", payload.id))?;

    Ok((StatusCode::OK, Json(DeleteResponse::success())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::errors::ApiErrorKind;
    use chrono::{TimeDelta, TimeZone};
    use pingpal_types::RecordId;

    async fn add_task(state: &AppState, text: &str) -> Task {
        let (status, Json(task)) = create_task_endpoint(
            State(state.clone()),
            Json(CreateTask { text: text.into() }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::OK);
        task
    }

    async fn all_tasks(state: &AppState) -> Vec<Task> {
        let (_, Json(tasks)) = list_tasks_endpoint(State(state.clone())).await.unwrap();
        tasks
    }

    async fn all_pings(state: &AppState) -> Vec<Ping> {
        let (_, Json(pings)) = list_pings_endpoint(State(state.clone())).await.unwrap();
        pings
    }

    #[tokio::test]
    async fn created_task_is_listed() {
        let state = AppState::in_memory();
        let task = add_task(&state, "Water the plants").await;

        assert!(task.id.0 > 0);
        assert_eq!(all_tasks(&state).await, [task]);
    }

    #[tokio::test]
    async fn deleting_unknown_task_still_succeeds() {
        let state = AppState::in_memory();
        let task = add_task(&state, "Keep me").await;

        let (status, Json(response)) = delete_task_endpoint(
            State(state.clone()),
            Json(DeleteRecord {
                id: RecordId(task.id.0 + 1000),
            }),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::OK);
        assert!(response.success);
        assert_eq!(all_tasks(&state).await, [task]);
    }

    #[tokio::test]
    async fn deletes_only_the_requested_task() {
        let state = AppState::in_memory();
        let first = add_task(&state, "first").await;
        let second = add_task(&state, "second").await;

        delete_task_endpoint(State(state.clone()), Json(DeleteRecord { id: first.id }))
            .await
            .unwrap();

        assert_eq!(all_tasks(&state).await, [second]);
    }

    #[tokio::test]
    async fn rapid_creations_get_distinct_ids() {
        let state = AppState::in_memory();
        let mut ids = Vec::new();
        for i in 0..50 {
            ids.push(add_task(&state, &format!("task {i}")).await.id);
        }

        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(all_tasks(&state).await.len(), 50);
    }

    #[tokio::test]
    async fn ping_with_absolute_expiry_round_trips() {
        let state = AppState::in_memory();
        let t0 = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

        let (_, Json(ping)) = create_ping_endpoint(
            State(state.clone()),
            Json(CreatePing::at("Drink water".into(), t0 + TimeDelta::minutes(1))),
        )
        .await
        .unwrap();

        let pings = all_pings(&state).await;
        assert_eq!(pings, [ping]);
        assert_eq!(pings[0].text, "Drink water");
        assert_eq!(pings[0].expires_at.timestamp_millis(), 1_700_000_060_000);
    }

    #[tokio::test]
    async fn ping_with_minutes_expires_relative_to_server_clock() {
        let state = AppState::in_memory();
        let before = Utc::now();

        let (_, Json(ping)) = create_ping_endpoint(
            State(state.clone()),
            Json(CreatePing::in_minutes("Stand up".into(), 5)),
        )
        .await
        .unwrap();

        let after = Utc::now();
        assert!(ping.expires_at >= before + TimeDelta::minutes(5));
        assert!(ping.expires_at <= after + TimeDelta::minutes(5));
    }

    #[tokio::test]
    async fn ping_without_expiry_is_a_bad_request() {
        let state = AppState::in_memory();

        let error = create_ping_endpoint(
            State(state.clone()),
            Json(CreatePing {
                text: "Whenever".into(),
                minutes: None,
                expires_at: None,
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(error.kind(), ApiErrorKind::BadRequest);
        assert!(all_pings(&state).await.is_empty());
    }

    #[tokio::test]
    async fn deleting_a_ping_removes_exactly_that_ping() {
        let state = AppState::in_memory();
        let mut created = Vec::new();
        for text in ["one", "two", "three"] {
            let (_, Json(ping)) = create_ping_endpoint(
                State(state.clone()),
                Json(CreatePing::in_minutes(text.into(), 1)),
            )
            .await
            .unwrap();
            created.push(ping);
        }

        delete_ping_endpoint(State(state.clone()), Json(DeleteRecord { id: created[1].id }))
            .await
            .unwrap();

        let texts = all_pings(&state)
            .await
            .into_iter()
            .map(|ping| ping.text)
            .collect::<Vec<_>>();
        assert_eq!(texts, ["one", "three"]);
    }
}
