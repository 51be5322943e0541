use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{ItemsResponse, MessageResponse},
    domain::models::{Collection, IndustryTypeFields, ListParams, NewIndustryType},
    AppState,
};

use super::{ApiError, ApiJson};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_types).post(create_type))
        .route(
            "/:type_id",
            get(get_type).put(update_type).delete(delete_type),
        )
}

/// Every industry type, across all store pages.
#[instrument(name = "GET /types", skip(app_state))]
async fn list_types(
    State(app_state): State<AppState>,
) -> Result<Json<ItemsResponse<Value>>, ApiError> {
    let types = app_state
        .records(Collection::Types)
        .list_all(ListParams::new())
        .await?;
    Ok(Json(ItemsResponse::from(types)))
}

#[instrument(name = "POST /types", skip(app_state))]
async fn create_type(
    State(app_state): State<AppState>,
    ApiJson(body): ApiJson<NewIndustryType>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = app_state.records(Collection::Types).create(&body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(name = "GET /types/:type_id", skip(app_state))]
async fn get_type(
    State(app_state): State<AppState>,
    Path(type_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let industry_type = app_state.records(Collection::Types).get(&type_id).await?;
    Ok(Json(industry_type))
}

#[instrument(name = "PUT /types/:type_id", skip(app_state))]
async fn update_type(
    State(app_state): State<AppState>,
    Path(type_id): Path<String>,
    ApiJson(body): ApiJson<IndustryTypeFields>,
) -> Result<Json<Value>, ApiError> {
    let updated = app_state
        .records(Collection::Types)
        .update(&type_id, &body)
        .await?;
    Ok(Json(updated))
}

#[instrument(name = "DELETE /types/:type_id", skip(app_state))]
async fn delete_type(
    State(app_state): State<AppState>,
    Path(type_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    app_state.records(Collection::Types).delete(&type_id).await?;
    Ok(Json(MessageResponse::new("Type deleted")))
}
