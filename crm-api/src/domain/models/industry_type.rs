use serde::{Deserialize, Serialize};

/// Body of a new industry type. The description defaults to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewIndustryType {
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndustryTypeFields {
    pub name: Option<String>,
    pub description: Option<String>,
}
