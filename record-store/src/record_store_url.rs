#[derive(Debug, Clone)]
pub struct RecordStoreURL(String);

impl AsRef<str> for RecordStoreURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl RecordStoreURL {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self(base_url.into())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// `{base}/api/collections/{collection}/records`
    pub fn records(&self, collection: &str) -> Self {
        self.append_path(&format!("/api/collections/{}/records", collection))
    }

    /// `{base}/api/collections/{collection}/records/{id}`
    pub fn record(&self, collection: &str, id: &str) -> Self {
        self.records(collection).append_path(id)
    }
}
