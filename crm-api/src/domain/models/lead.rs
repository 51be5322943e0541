use serde::{Deserialize, Serialize};

/// Fields forwarded when creating or replacing a lead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadFields {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub personal_email: Option<String>,
    pub work_email: Option<String>,
}
