use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::domain::{
    models::{Collection, ListParams, Page},
    ports::outbound::RecordStore,
    CrmError,
};

/// Read every page of a listing, `page_size` records at a time, until the
/// store returns its last page.
pub async fn fetch_all(
    store: &dyn RecordStore,
    collection: Collection,
    params: ListParams,
    page_size: u32,
) -> Result<Vec<Value>, CrmError> {
    let page_size = page_size.max(1);
    let mut items = Vec::new();
    let mut page = 1;

    loop {
        let params = params.clone().page(page).per_page(page_size);
        let batch = store.list(collection, &params).await?;
        let last = batch.is_last(page, page_size);
        items.extend(batch.items);

        if last {
            break;
        }
        page += 1;
    }

    tracing::debug!(%collection, pages = page, total = items.len(), "fetched all records");
    Ok(items)
}

pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, CrmError> {
    serde_json::from_value(value).map_err(CrmError::invalid_record)
}

pub fn decode_all<T: DeserializeOwned>(values: Vec<Value>) -> Result<Vec<T>, CrmError> {
    values.into_iter().map(decode).collect()
}

pub fn encode<T: Serialize>(payload: &T) -> Result<Value, CrmError> {
    serde_json::to_value(payload).map_err(CrmError::invalid_record)
}

/// Pass-through CRUD on one collection.
#[derive(Clone)]
pub struct RecordService {
    store: Arc<dyn RecordStore>,
    collection: Collection,
    page_size: u32,
}

impl RecordService {
    pub fn new(store: Arc<dyn RecordStore>, collection: Collection, page_size: u32) -> Self {
        Self {
            store,
            collection,
            page_size,
        }
    }

    /// First page, as the store returns it.
    pub async fn list(&self, params: &ListParams) -> Result<Page, CrmError> {
        self.store.list(self.collection, params).await
    }

    pub async fn list_all(&self, params: ListParams) -> Result<Vec<Value>, CrmError> {
        fetch_all(self.store.as_ref(), self.collection, params, self.page_size).await
    }

    pub async fn get(&self, id: &str) -> Result<Value, CrmError> {
        self.store.get(self.collection, id, None).await
    }

    pub async fn create<P: Serialize>(&self, payload: &P) -> Result<Value, CrmError> {
        self.store.create(self.collection, encode(payload)?).await
    }

    pub async fn update<P: Serialize>(&self, id: &str, payload: &P) -> Result<Value, CrmError> {
        self.store.update(self.collection, id, encode(payload)?).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), CrmError> {
        self.store.delete(self.collection, id).await
    }
}
