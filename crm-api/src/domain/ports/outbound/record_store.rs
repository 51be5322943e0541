use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{
    models::{Collection, ListParams, Page},
    CrmError,
};

/// Outbound port for the external record store.
///
/// Records travel as raw JSON so that fields this service does not know
/// about are forwarded untouched. Typed views are decoded on top of it by
/// the domain services.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Fetch a single page of a collection.
    async fn list(&self, collection: Collection, params: &ListParams)
        -> Result<Page, CrmError>;

    async fn get(
        &self,
        collection: Collection,
        id: &str,
        expand: Option<&str>,
    ) -> Result<Value, CrmError>;

    /// Create a record and return it as stored.
    async fn create(&self, collection: Collection, body: Value) -> Result<Value, CrmError>;

    /// Partially update a record; keys absent from `body` are left alone.
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        body: Value,
    ) -> Result<Value, CrmError>;

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), CrmError>;
}
