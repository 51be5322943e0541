use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::{ListPage, ListQuery, RecordStoreURL};

/// HTTP client for a collection-based record store.
///
/// Every call maps to exactly one request. There are no retries and no
/// automatic pagination; callers that need more than one page loop over
/// [`RecordStoreClient::list`] themselves.
#[derive(Debug, Clone)]
pub struct RecordStoreClient {
    http: reqwest::Client,
    base_url: RecordStoreURL,
}

impl RecordStoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: RecordStoreURL::new(base_url),
        }
    }

    /// Like [`RecordStoreClient::new`], but every request is aborted after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RecordStoreError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RecordStoreError::Other(e.to_string()))?;

        Ok(Self {
            http,
            base_url: RecordStoreURL::new(base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_ref()
    }

    pub async fn list<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &ListQuery,
    ) -> Result<ListPage<T>, RecordStoreError> {
        let url = self.base_url.records(collection);
        tracing::debug!(%collection, query = ?query.as_pairs(), "listing records");

        let request = self.http.get(url.as_ref()).query(&query.as_pairs());
        self.fetch(request).await
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
        expand: Option<&str>,
    ) -> Result<T, RecordStoreError> {
        let url = self.base_url.record(collection, id);

        let mut request = self.http.get(url.as_ref());
        if let Some(expand) = expand {
            request = request.query(&[("expand", expand)]);
        }
        self.fetch(request).await
    }

    pub async fn create<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        collection: &str,
        body: &B,
    ) -> Result<T, RecordStoreError> {
        let url = self.base_url.records(collection);
        tracing::debug!(%collection, "creating record");

        self.fetch(self.http.post(url.as_ref()).json(body)).await
    }

    /// Partial update; only the fields present in `body` are changed.
    pub async fn update<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
        body: &B,
    ) -> Result<T, RecordStoreError> {
        let url = self.base_url.record(collection, id);
        tracing::debug!(%collection, %id, "updating record");

        self.fetch(self.http.patch(url.as_ref()).json(body)).await
    }

    pub async fn delete(&self, collection: &str, id: &str) -> Result<(), RecordStoreError> {
        let url = self.base_url.record(collection, id);
        tracing::debug!(%collection, %id, "deleting record");

        self.send(self.http.delete(url.as_ref())).await?;
        Ok(())
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, RecordStoreError> {
        let resp = self.send(request).await?;

        resp.json::<T>().await.map_err(|e| {
            RecordStoreError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, RecordStoreError> {
        let resp = request
            .send()
            .await
            .map_err(|e| RecordStoreError::ResponseError(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
        tracing::warn!(status = status.as_u16(), %message, "record store returned an error");

        Err(RecordStoreError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[derive(Error, Debug)]
pub enum RecordStoreError {
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("Other: {0}")]
    Other(String),
}

impl RecordStoreError {
    /// The upstream HTTP status, if the store answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body returned by the record store on non-2xx responses.
#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    message: Option<String>,
}

fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<StoreErrorBody>(trimmed) {
        Ok(StoreErrorBody {
            message: Some(message),
        }) if !message.is_empty() => Some(message),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    }
}
