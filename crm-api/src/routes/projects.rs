use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{BoardTasksResponse, MessageResponse},
    domain::models::{Collection, ListParams, Page, ProjectFields},
    AppState,
};

use super::{ApiError, ApiJson, ListQuery};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/:project_id",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/:project_id/boards", get(list_project_boards))
        .route("/:project_id/board-tasks", get(list_board_tasks))
}

#[instrument(name = "GET /projects", skip(app_state))]
async fn list_projects(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page>, ApiError> {
    let page = app_state
        .records(Collection::Projects)
        .list(&ListParams::from(query))
        .await?;
    Ok(Json(page))
}

#[instrument(name = "POST /projects", skip(app_state))]
async fn create_project(
    State(app_state): State<AppState>,
    ApiJson(body): ApiJson<ProjectFields>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = app_state.records(Collection::Projects).create(&body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(name = "GET /projects/:project_id", skip(app_state))]
async fn get_project(
    State(app_state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let project = app_state.records(Collection::Projects).get(&project_id).await?;
    Ok(Json(project))
}

#[instrument(name = "PUT /projects/:project_id", skip(app_state))]
async fn update_project(
    State(app_state): State<AppState>,
    Path(project_id): Path<String>,
    ApiJson(body): ApiJson<ProjectFields>,
) -> Result<Json<Value>, ApiError> {
    let updated = app_state
        .records(Collection::Projects)
        .update(&project_id, &body)
        .await?;
    Ok(Json(updated))
}

#[instrument(name = "DELETE /projects/:project_id", skip(app_state))]
async fn delete_project(
    State(app_state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    app_state.records(Collection::Projects).delete(&project_id).await?;
    Ok(Json(MessageResponse::new("Project deleted")))
}

// ============================================================================
// Boards of a project
// ============================================================================

#[instrument(name = "GET /projects/:project_id/boards", skip(app_state))]
async fn list_project_boards(
    State(app_state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Page>, ApiError> {
    let boards = app_state.boards().list_for_project(&project_id).await?;
    Ok(Json(boards))
}

#[instrument(name = "GET /projects/:project_id/board-tasks", skip(app_state))]
async fn list_board_tasks(
    State(app_state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<BoardTasksResponse>>, ApiError> {
    let groups = app_state.tasks().board_tasks(&project_id).await?;
    Ok(Json(groups.into_iter().map(BoardTasksResponse::from).collect()))
}
