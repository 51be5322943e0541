use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date};

use super::{OneOrMany, RelationRef};

/// End date the record store reports for date fields that were never set.
pub const ZERO_DATE: &str = "0001-01-01 00:00:00Z";

pub const NO_LEAD_NAME: &str = "no name";
pub const NO_ACCOUNT_NAME: &str = "no company";
pub const NO_ACCOUNT_TYPE: &str = "no type";

/// Whether an end date leaves the relation active.
pub fn is_open_end_date(end_date: Option<&str>) -> bool {
    match end_date.map(str::trim) {
        None => true,
        Some(value) => value.is_empty() || value == "null" || value == ZERO_DATE,
    }
}

/// Body of a request assigning a lead to an account.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAccountLeadRequest {
    pub account_id: Option<String>,
    pub lead_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub notes: Option<String>,
}

/// Payload forwarded to the store when creating a relation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAccountLead {
    pub account_id: Option<String>,
    pub lead_id: Option<String>,
    pub start_date: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl NewAccountLeadRequest {
    /// Fill in defaults: start today, empty notes, and drop blank end dates.
    pub fn into_new(self, today: Date) -> NewAccountLead {
        let start_date = self
            .start_date
            .filter(|date| !date.trim().is_empty())
            .unwrap_or_else(|| today.to_string());
        let end_date = self.end_date.filter(|date| {
            let date = date.trim();
            !date.is_empty() && date != "null"
        });

        NewAccountLead {
            account_id: self.account_id,
            lead_id: self.lead_id,
            start_date,
            notes: self.notes.unwrap_or_default(),
            end_date,
        }
    }
}

/// Fields forwarded when replacing a relation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountLeadFields {
    pub account_id: Option<String>,
    pub lead_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub notes: Option<String>,
}

/// Partial relation update, e.g. closing it with `{"end_date": "2025-01-31"}`
/// or reopening it with `{"end_date": null}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountLeadPatch {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub account_id: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub lead_id: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub start_date: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub end_date: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub notes: Option<Option<String>>,
}

/// Typed view of a stored relation, with optional expansions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountLead {
    pub id: String,
    #[serde(default)]
    pub account_id: Option<RelationRef>,
    #[serde(default)]
    pub lead_id: Option<RelationRef>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub expand: Option<AccountLeadExpand>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountLeadExpand {
    #[serde(default)]
    pub account_id: Option<OneOrMany<ExpandedAccount>>,
    #[serde(default)]
    pub lead_id: Option<OneOrMany<NamedRecord>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpandedAccount {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub expand: Option<AccountExpand>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountExpand {
    #[serde(default)]
    pub type_id: Option<OneOrMany<NamedRecord>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedRecord {
    #[serde(default)]
    pub name: Option<String>,
}

impl AccountLead {
    /// Active relation between this account and lead.
    pub fn is_active_between(&self, account_id: &str, lead_id: &str) -> bool {
        let same_account = self
            .account_id
            .as_ref()
            .is_some_and(|r| r.references(account_id));
        let same_lead = self
            .lead_id
            .as_ref()
            .is_some_and(|r| r.references(lead_id));

        same_account && same_lead && is_open_end_date(self.end_date.as_deref())
    }

    /// Start date parsed from its leading `YYYY-MM-DD`, if any.
    pub fn start(&self) -> Option<Date> {
        let raw = self.start_date.as_deref()?.trim();
        let day = raw.get(..10)?;
        Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
    }

    /// Flatten into a summary, using placeholders for missing expansions.
    pub fn summarize(&self) -> RecentAccountLead {
        let expand = self.expand.as_ref();
        let account = expand
            .and_then(|e| e.account_id.as_ref())
            .and_then(OneOrMany::first);

        let lead_name = expand
            .and_then(|e| e.lead_id.as_ref())
            .and_then(OneOrMany::first)
            .and_then(|lead| non_empty(lead.name.as_deref()));
        let account_name = account.and_then(|a| non_empty(a.name.as_deref()));
        let account_type = account
            .and_then(|a| a.expand.as_ref())
            .and_then(|e| e.type_id.as_ref())
            .and_then(OneOrMany::first)
            .and_then(|t| non_empty(t.name.as_deref()));

        RecentAccountLead {
            id: self.id.clone(),
            start_date: self.start_date.clone().unwrap_or_default(),
            lead_name: lead_name.unwrap_or(NO_LEAD_NAME).to_string(),
            account_name: account_name.unwrap_or(NO_ACCOUNT_NAME).to_string(),
            account_type: account_type.unwrap_or(NO_ACCOUNT_TYPE).to_string(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Flattened relation for the "recent assignments" view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentAccountLead {
    pub id: String,
    pub start_date: String,
    pub lead_name: String,
    pub account_name: String,
    pub account_type: String,
}

/// Relations starting in the same calendar month and year as `today`.
///
/// Relations without a parseable start date are skipped.
pub fn recent_account_leads(relations: &[AccountLead], today: Date) -> Vec<RecentAccountLead> {
    relations
        .iter()
        .filter(|relation| match relation.start() {
            Some(start) => start.year() == today.year() && start.month() == today.month(),
            None => {
                tracing::debug!(id = %relation.id, "skipping relation without start date");
                false
            }
        })
        .map(AccountLead::summarize)
        .collect()
}
