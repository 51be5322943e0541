use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tracing::instrument;

use crate::{
    adapters::inbound::http::MessageResponse,
    domain::models::{Collection, LeadFields, ListParams, Page},
    AppState,
};

use super::{ApiError, ApiJson, ListQuery};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_leads).post(create_lead))
        .route(
            "/:lead_id",
            get(get_lead).put(update_lead).delete(delete_lead),
        )
}

#[instrument(name = "GET /leads", skip(app_state))]
async fn list_leads(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page>, ApiError> {
    let page = app_state
        .records(Collection::Leads)
        .list(&ListParams::from(query))
        .await?;
    Ok(Json(page))
}

#[instrument(name = "POST /leads", skip(app_state))]
async fn create_lead(
    State(app_state): State<AppState>,
    ApiJson(body): ApiJson<LeadFields>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = app_state.records(Collection::Leads).create(&body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(name = "GET /leads/:lead_id", skip(app_state))]
async fn get_lead(
    State(app_state): State<AppState>,
    Path(lead_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let lead = app_state.records(Collection::Leads).get(&lead_id).await?;
    Ok(Json(lead))
}

#[instrument(name = "PUT /leads/:lead_id", skip(app_state))]
async fn update_lead(
    State(app_state): State<AppState>,
    Path(lead_id): Path<String>,
    ApiJson(body): ApiJson<LeadFields>,
) -> Result<Json<Value>, ApiError> {
    let updated = app_state
        .records(Collection::Leads)
        .update(&lead_id, &body)
        .await?;
    Ok(Json(updated))
}

#[instrument(name = "DELETE /leads/:lead_id", skip(app_state))]
async fn delete_lead(
    State(app_state): State<AppState>,
    Path(lead_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    app_state.records(Collection::Leads).delete(&lead_id).await?;
    Ok(Json(MessageResponse::new("Lead deleted")))
}
