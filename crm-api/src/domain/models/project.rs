use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectFields {
    pub name: Option<String>,
    pub status: Option<String>,
    pub account_id: Option<String>,
}
