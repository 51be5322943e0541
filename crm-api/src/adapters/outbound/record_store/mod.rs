mod conversions;

use async_trait::async_trait;
use record_store::{ListPage, RecordStoreClient};
use serde_json::Value;

use crate::domain::{
    models::{Collection, ListParams, Page},
    ports::outbound::RecordStore,
    CrmError,
};

use self::conversions::{map_record_store_error, to_domain_page, to_list_query};

/// Adapter that wraps the record store client to implement the RecordStore port.
pub struct RecordStoreAdapter {
    client: RecordStoreClient,
}

impl RecordStoreAdapter {
    pub fn new(client: RecordStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordStore for RecordStoreAdapter {
    async fn list(&self, collection: Collection, params: &ListParams) -> Result<Page, CrmError> {
        let page: ListPage<Value> = self
            .client
            .list(collection.as_ref(), &to_list_query(params))
            .await
            .map_err(map_record_store_error)?;
        Ok(to_domain_page(page))
    }

    async fn get(
        &self,
        collection: Collection,
        id: &str,
        expand: Option<&str>,
    ) -> Result<Value, CrmError> {
        self.client
            .get(collection.as_ref(), id, expand)
            .await
            .map_err(map_record_store_error)
    }

    async fn create(&self, collection: Collection, body: Value) -> Result<Value, CrmError> {
        self.client
            .create(collection.as_ref(), &body)
            .await
            .map_err(map_record_store_error)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        body: Value,
    ) -> Result<Value, CrmError> {
        self.client
            .update(collection.as_ref(), id, &body)
            .await
            .map_err(map_record_store_error)
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), CrmError> {
        self.client
            .delete(collection.as_ref(), id)
            .await
            .map_err(map_record_store_error)
    }
}
