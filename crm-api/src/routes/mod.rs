pub(crate) mod account_leads;
pub(crate) mod accounts;
pub(crate) mod boards;
pub(crate) mod error;
pub(crate) mod leads;
pub(crate) mod projects;
pub(crate) mod tasks;
pub(crate) mod types;

pub(crate) use error::ApiError;

use axum::extract::FromRequest;
use serde::Deserialize;

use crate::domain::models::ListParams;

/// JSON body extractor whose rejections use the API's error format.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Optional paging and expansion forwarded on plain list endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub expand: Option<String>,
}

impl From<ListQuery> for ListParams {
    fn from(query: ListQuery) -> Self {
        ListParams {
            page: query.page,
            per_page: query.per_page,
            expand: query.expand,
            ..Default::default()
        }
    }
}
