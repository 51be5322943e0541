//! In-memory record store for tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::{
    models::{Collection, ListParams, Page},
    ports::outbound::RecordStore,
    CrmError,
};

/// Store's default page size when none is requested.
const DEFAULT_PER_PAGE: u32 = 30;

/// Mock record store backed by in-memory vectors, one per collection.
///
/// Supports pagination and equality filters the way the real store does,
/// and counts list calls so tests can assert how many pages were read.
#[derive(Clone, Default)]
pub struct MockRecordStore {
    records: Arc<RwLock<HashMap<Collection, Vec<Value>>>>,
    list_calls: Arc<RwLock<HashMap<Collection, usize>>>,
    failing: Arc<RwLock<HashSet<Collection>>>,
    next_id: Arc<RwLock<u64>>,
}

#[allow(dead_code)]
impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a collection with records.
    pub fn with_records(self, collection: Collection, records: Vec<Value>) -> Self {
        self.records
            .write()
            .unwrap()
            .entry(collection)
            .or_default()
            .extend(records);
        self
    }

    /// Make every call against `collection` fail with a 500.
    pub fn failing(self, collection: Collection) -> Self {
        self.failing.write().unwrap().insert(collection);
        self
    }

    pub fn records(&self, collection: Collection) -> Vec<Value> {
        self.records
            .read()
            .unwrap()
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn record(&self, collection: Collection, id: &str) -> Option<Value> {
        self.records(collection)
            .into_iter()
            .find(|record| record["id"] == id)
    }

    pub fn list_calls(&self, collection: Collection) -> usize {
        self.list_calls
            .read()
            .unwrap()
            .get(&collection)
            .copied()
            .unwrap_or_default()
    }

    fn check(&self, collection: Collection) -> Result<(), CrmError> {
        if self.failing.read().unwrap().contains(&collection) {
            return Err(CrmError::Upstream {
                status: 500,
                message: format!("{} is unavailable", collection),
            });
        }
        Ok(())
    }

    fn not_found() -> CrmError {
        CrmError::Upstream {
            status: 404,
            message: "The requested resource wasn't found.".to_string(),
        }
    }
}

fn field_matches(record: &Value, field: &str, expected: &str) -> bool {
    match &record[field] {
        Value::String(value) => value == expected,
        Value::Array(values) => values.iter().any(|v| v == expected),
        _ => false,
    }
}

fn into_object(body: Value) -> Map<String, Value> {
    match body {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn list(
        &self,
        collection: Collection,
        params: &ListParams,
    ) -> Result<Page, CrmError> {
        *self
            .list_calls
            .write()
            .unwrap()
            .entry(collection)
            .or_default() += 1;
        self.check(collection)?;

        let matching: Vec<Value> = self
            .records(collection)
            .into_iter()
            .filter(|record| {
                params
                    .equals
                    .iter()
                    .all(|(field, value)| field_matches(record, field, value))
            })
            .collect();

        let page = params.page.unwrap_or(1).max(1);
        let per_page = params.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);
        let total_items = matching.len() as i64;
        let items = matching
            .into_iter()
            .skip(((page - 1) * per_page) as usize)
            .take(per_page as usize)
            .collect();

        Ok(Page {
            page,
            per_page,
            total_items,
            total_pages: (total_items + per_page as i64 - 1) / per_page as i64,
            items,
        })
    }

    async fn get(
        &self,
        collection: Collection,
        id: &str,
        _expand: Option<&str>,
    ) -> Result<Value, CrmError> {
        self.check(collection)?;
        self.record(collection, id).ok_or_else(Self::not_found)
    }

    async fn create(&self, collection: Collection, body: Value) -> Result<Value, CrmError> {
        self.check(collection)?;

        let id = {
            let mut next_id = self.next_id.write().unwrap();
            *next_id += 1;
            format!("rec{}", *next_id)
        };
        let mut record = into_object(body);
        record.insert("id".to_string(), Value::String(id));
        record.insert(
            "collectionName".to_string(),
            Value::String(collection.to_string()),
        );
        let record = Value::Object(record);

        self.records
            .write()
            .unwrap()
            .entry(collection)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        body: Value,
    ) -> Result<Value, CrmError> {
        self.check(collection)?;

        let mut records = self.records.write().unwrap();
        let record = records
            .get_mut(&collection)
            .and_then(|records| records.iter_mut().find(|r| r["id"] == id))
            .ok_or_else(Self::not_found)?;

        if let Value::Object(stored) = record {
            for (key, value) in into_object(body) {
                stored.insert(key, value);
            }
        }
        Ok(record.clone())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), CrmError> {
        self.check(collection)?;

        let mut records = self.records.write().unwrap();
        let records = records.get_mut(&collection).ok_or_else(Self::not_found)?;
        let before = records.len();
        records.retain(|r| r["id"] != id);

        if records.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}
