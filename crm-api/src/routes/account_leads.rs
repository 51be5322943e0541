use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use time::OffsetDateTime;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{MessageResponse, RecentAccountLeadResponse},
    domain::models::{AccountLeadFields, AccountLeadPatch, NewAccountLeadRequest, Page},
    AppState,
};

use super::{ApiError, ApiJson};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_account_leads).post(create_account_lead))
        .route("/all", get(list_all_account_leads))
        .route("/recent", get(list_recent_account_leads))
        .route(
            "/:relation_id",
            get(get_account_lead)
                .put(replace_account_lead)
                .patch(patch_account_lead)
                .delete(delete_account_lead),
        )
}

/// Current date on the UTC clock; used for default start dates and the
/// recent view.
fn today() -> time::Date {
    OffsetDateTime::now_utc().date()
}

#[instrument(name = "GET /account-leads/all", skip(app_state))]
async fn list_all_account_leads(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let relations = app_state.account_leads().list_expanded().await?;
    Ok(Json(relations))
}

#[instrument(name = "GET /account-leads", skip(app_state))]
async fn list_account_leads(State(app_state): State<AppState>) -> Result<Json<Page>, ApiError> {
    let page = app_state.account_leads().list_page().await?;
    Ok(Json(page))
}

#[instrument(name = "POST /account-leads", skip(app_state))]
async fn create_account_lead(
    State(app_state): State<AppState>,
    ApiJson(body): ApiJson<NewAccountLeadRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = app_state.account_leads().create(body, today()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(name = "GET /account-leads/recent", skip(app_state))]
async fn list_recent_account_leads(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<RecentAccountLeadResponse>>, ApiError> {
    let recent = app_state.account_leads().recent(today()).await?;
    Ok(Json(
        recent
            .into_iter()
            .map(RecentAccountLeadResponse::from)
            .collect(),
    ))
}

#[instrument(name = "GET /account-leads/:relation_id", skip(app_state))]
async fn get_account_lead(
    State(app_state): State<AppState>,
    Path(relation_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let relation = app_state.account_leads().records().get(&relation_id).await?;
    Ok(Json(relation))
}

#[instrument(name = "PUT /account-leads/:relation_id", skip(app_state))]
async fn replace_account_lead(
    State(app_state): State<AppState>,
    Path(relation_id): Path<String>,
    ApiJson(body): ApiJson<AccountLeadFields>,
) -> Result<Json<Value>, ApiError> {
    let updated = app_state
        .account_leads()
        .records()
        .update(&relation_id, &body)
        .await?;
    Ok(Json(updated))
}

#[instrument(name = "PATCH /account-leads/:relation_id", skip(app_state))]
async fn patch_account_lead(
    State(app_state): State<AppState>,
    Path(relation_id): Path<String>,
    ApiJson(body): ApiJson<AccountLeadPatch>,
) -> Result<Json<Value>, ApiError> {
    let updated = app_state
        .account_leads()
        .records()
        .update(&relation_id, &body)
        .await?;
    Ok(Json(updated))
}

#[instrument(name = "DELETE /account-leads/:relation_id", skip(app_state))]
async fn delete_account_lead(
    State(app_state): State<AppState>,
    Path(relation_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    app_state
        .account_leads()
        .records()
        .delete(&relation_id)
        .await?;
    Ok(Json(MessageResponse::new("Relation deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_follows_the_utc_clock() {
        let before = OffsetDateTime::now_utc().date();
        let current = today();
        let after = OffsetDateTime::now_utc().date();

        assert!(current == before || current == after);
    }
}
