use serde::{Deserialize, Serialize};

/// A relation field as returned by the record store.
///
/// Single relations come back as one value, multi relations as an array.
/// Collections have been migrated between the two, so both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }
}

/// Reference to other records by id.
pub type RelationRef = OneOrMany<String>;

impl RelationRef {
    /// Whether the relation points at `id`. An empty id never matches.
    pub fn references(&self, id: &str) -> bool {
        !id.is_empty() && self.as_slice().iter().any(|value| value == id)
    }
}
