use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for listing a collection.
///
/// Filtering is limited to field equality, which is all the proxy needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub equals: Vec<(String, String)>,
    pub expand: Option<String>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.equals.push((field.into(), value.into()));
        self
    }

    pub fn expand(mut self, expand: impl Into<String>) -> Self {
        self.expand = Some(expand.into());
        self
    }
}

/// One page of records, serialized in the store's own shape so the frontend
/// can keep reading `items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub page: u32,
    pub per_page: u32,
    pub total_items: i64,
    pub total_pages: i64,
    pub items: Vec<Value>,
}

impl Page {
    /// Whether nothing is left to fetch after this page, which was requested
    /// as page `requested_page` of `requested_size` items.
    ///
    /// A page is the last one when it is empty, when it holds fewer items than
    /// the store's effective page size (the store may cap `perPage`), or when
    /// the store reports no further pages.
    pub fn is_last(&self, requested_page: u32, requested_size: u32) -> bool {
        let page_size = match self.per_page {
            0 => requested_size,
            reported => reported.min(requested_size),
        };

        self.items.is_empty()
            || self.items.len() < page_size as usize
            || (self.total_pages > 0 && i64::from(requested_page) >= self.total_pages)
    }
}
