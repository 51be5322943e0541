use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde_json::Value;
use tracing::instrument;

use crate::{
    adapters::inbound::http::MessageResponse,
    domain::models::{ListParams, MoveTaskRequest, NewTask, NewTaskRequest, Page, TaskUpdate},
    AppState,
};

use super::{ApiError, ApiJson, ListQuery};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route(
            "/:task_id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/:task_id/move", patch(move_task))
}

#[instrument(name = "GET /tasks", skip(app_state))]
async fn list_tasks(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page>, ApiError> {
    let page = app_state
        .tasks()
        .records()
        .list(&ListParams::from(query))
        .await?;
    Ok(Json(page))
}

#[instrument(name = "POST /tasks", skip(app_state))]
async fn create_task(
    State(app_state): State<AppState>,
    ApiJson(body): ApiJson<NewTaskRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = app_state
        .tasks()
        .records()
        .create(&NewTask::from(body))
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(name = "GET /tasks/:task_id", skip(app_state))]
async fn get_task(
    State(app_state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let task = app_state.tasks().records().get(&task_id).await?;
    Ok(Json(task))
}

#[instrument(name = "PUT /tasks/:task_id", skip(app_state))]
async fn update_task(
    State(app_state): State<AppState>,
    Path(task_id): Path<String>,
    ApiJson(body): ApiJson<TaskUpdate>,
) -> Result<Json<Value>, ApiError> {
    let updated = app_state.tasks().records().update(&task_id, &body).await?;
    Ok(Json(updated))
}

#[instrument(name = "DELETE /tasks/:task_id", skip(app_state))]
async fn delete_task(
    State(app_state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    app_state.tasks().records().delete(&task_id).await?;
    Ok(Json(MessageResponse::new("Task deleted")))
}

#[instrument(name = "PATCH /tasks/:task_id/move", skip(app_state))]
async fn move_task(
    State(app_state): State<AppState>,
    Path(task_id): Path<String>,
    ApiJson(body): ApiJson<MoveTaskRequest>,
) -> Result<Json<Value>, ApiError> {
    let moved = app_state.tasks().move_task(&task_id, body).await?;
    Ok(Json(moved))
}
