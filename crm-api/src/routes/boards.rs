use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::Value;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{ColumnResponse, MessageResponse, OkResponse},
    domain::models::{BoardFields, ColumnOrder, ColumnPatch, NewBoardRequest, NewColumn, Page},
    AppState,
};

use super::{ApiError, ApiJson};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_board))
        .route(
            "/:board_id",
            get(get_board).put(update_board).delete(delete_board),
        )
        .route("/:board_id/columns", get(list_columns).post(add_column))
        .route("/:board_id/columns/reorder", put(reorder_columns))
        .route("/:board_id/columns/:column_id", put(update_column))
        .route("/:board_id/tasks", get(list_board_tasks))
}

#[instrument(name = "POST /boards", skip(app_state))]
async fn create_board(
    State(app_state): State<AppState>,
    ApiJson(body): ApiJson<NewBoardRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = app_state.boards().create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(name = "GET /boards/:board_id", skip(app_state))]
async fn get_board(
    State(app_state): State<AppState>,
    Path(board_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let board = app_state.boards().records().get(&board_id).await?;
    Ok(Json(board))
}

#[instrument(name = "PUT /boards/:board_id", skip(app_state))]
async fn update_board(
    State(app_state): State<AppState>,
    Path(board_id): Path<String>,
    ApiJson(body): ApiJson<BoardFields>,
) -> Result<Json<Value>, ApiError> {
    let updated = app_state.boards().update(&board_id, &body).await?;
    Ok(Json(updated))
}

#[instrument(name = "DELETE /boards/:board_id", skip(app_state))]
async fn delete_board(
    State(app_state): State<AppState>,
    Path(board_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    app_state.boards().records().delete(&board_id).await?;
    Ok(Json(MessageResponse::new("Board deleted")))
}

// ============================================================================
// Columns
// ============================================================================

#[instrument(name = "GET /boards/:board_id/columns", skip(app_state))]
async fn list_columns(
    State(app_state): State<AppState>,
    Path(board_id): Path<String>,
) -> Result<Json<Vec<ColumnResponse>>, ApiError> {
    let columns = app_state.boards().columns(&board_id).await?;
    Ok(Json(columns.into_iter().map(ColumnResponse::from).collect()))
}

#[instrument(name = "POST /boards/:board_id/columns", skip(app_state))]
async fn add_column(
    State(app_state): State<AppState>,
    Path(board_id): Path<String>,
    ApiJson(body): ApiJson<NewColumn>,
) -> Result<(StatusCode, Json<ColumnResponse>), ApiError> {
    let column = app_state.boards().add_column(&board_id, body).await?;
    Ok((StatusCode::CREATED, Json(column.into())))
}

#[instrument(name = "PUT /boards/:board_id/columns/reorder", skip(app_state))]
async fn reorder_columns(
    State(app_state): State<AppState>,
    Path(board_id): Path<String>,
    ApiJson(body): ApiJson<ColumnOrder>,
) -> Result<Json<OkResponse>, ApiError> {
    app_state
        .boards()
        .reorder_columns(&board_id, &body.order)
        .await?;
    Ok(Json(OkResponse::ok()))
}

#[instrument(name = "PUT /boards/:board_id/columns/:column_id", skip(app_state))]
async fn update_column(
    State(app_state): State<AppState>,
    Path((board_id, column_id)): Path<(String, String)>,
    ApiJson(body): ApiJson<ColumnPatch>,
) -> Result<Json<ColumnResponse>, ApiError> {
    let column = app_state
        .boards()
        .update_column(&board_id, &column_id, body)
        .await?;
    Ok(Json(column.into()))
}

// ============================================================================
// Tasks
// ============================================================================

#[instrument(name = "GET /boards/:board_id/tasks", skip(app_state))]
async fn list_board_tasks(
    State(app_state): State<AppState>,
    Path(board_id): Path<String>,
) -> Result<Json<Page>, ApiError> {
    let tasks = app_state.tasks().list_for_board(&board_id).await?;
    Ok(Json(tasks))
}
