use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::{
    adapters::inbound::http::MessageResponse,
    domain::models::{AccountFields, AccountPatch, Collection, ListParams, Page},
    AppState,
};

use super::{ApiError, ApiJson, ListQuery};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_accounts).post(create_account))
        .route(
            "/:account_id",
            get(get_account)
                .put(replace_account)
                .patch(patch_account)
                .delete(delete_account),
        )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountListQuery {
    page: Option<u32>,
    per_page: Option<u32>,
    expand: Option<String>,
    #[serde(rename = "type_id")]
    type_id: Option<String>,
}

#[instrument(name = "GET /accounts", skip(app_state))]
async fn list_accounts(
    State(app_state): State<AppState>,
    Query(query): Query<AccountListQuery>,
) -> Result<Json<Page>, ApiError> {
    let mut params = ListParams::from(ListQuery {
        page: query.page,
        per_page: query.per_page,
        expand: query.expand,
    });
    if let Some(type_id) = query.type_id.filter(|id| !id.is_empty()) {
        params = params.where_eq("type_id", type_id);
    }

    let page = app_state.records(Collection::Accounts).list(&params).await?;
    Ok(Json(page))
}

#[instrument(name = "POST /accounts", skip(app_state))]
async fn create_account(
    State(app_state): State<AppState>,
    ApiJson(body): ApiJson<AccountFields>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = app_state.records(Collection::Accounts).create(&body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(name = "GET /accounts/:account_id", skip(app_state))]
async fn get_account(
    State(app_state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let account = app_state.records(Collection::Accounts).get(&account_id).await?;
    Ok(Json(account))
}

#[instrument(name = "PUT /accounts/:account_id", skip(app_state))]
async fn replace_account(
    State(app_state): State<AppState>,
    Path(account_id): Path<String>,
    ApiJson(body): ApiJson<AccountFields>,
) -> Result<Json<Value>, ApiError> {
    let updated = app_state
        .records(Collection::Accounts)
        .update(&account_id, &body)
        .await?;
    Ok(Json(updated))
}

#[instrument(name = "PATCH /accounts/:account_id", skip(app_state))]
async fn patch_account(
    State(app_state): State<AppState>,
    Path(account_id): Path<String>,
    ApiJson(body): ApiJson<AccountPatch>,
) -> Result<Json<Value>, ApiError> {
    let updated = app_state
        .records(Collection::Accounts)
        .update(&account_id, &body)
        .await?;
    Ok(Json(updated))
}

#[instrument(name = "DELETE /accounts/:account_id", skip(app_state))]
async fn delete_account(
    State(app_state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    app_state.records(Collection::Accounts).delete(&account_id).await?;
    Ok(Json(MessageResponse::new("Account deleted")))
}
