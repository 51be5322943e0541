use std::sync::Arc;

use serde_json::Value;
use time::Date;

use crate::domain::{
    models::{
        recent_account_leads, AccountLead, Collection, ListParams, NewAccountLeadRequest, Page,
        RecentAccountLead,
    },
    ports::outbound::RecordStore,
    services::records::{decode_all, RecordService},
    CrmError,
};

/// Expansion used by the listing endpoints.
pub const LIST_EXPAND: &str = "account_id,lead_id";
/// Expansion used by the recent view; also pulls the account's type.
pub const RECENT_EXPAND: &str = "account_id.type_id,lead_id";

/// Lead-to-account assignments.
///
/// Creation checks for an already active relation between the same account
/// and lead by scanning existing relations first. The check and the create
/// are separate requests, so two concurrent creates can both pass it.
pub struct AccountLeadService {
    records: RecordService,
    page_size: u32,
}

impl AccountLeadService {
    pub fn new(store: Arc<dyn RecordStore>, page_size: u32) -> Self {
        Self {
            records: RecordService::new(store, Collection::AccountLeads, page_size),
            page_size,
        }
    }

    pub fn records(&self) -> &RecordService {
        &self.records
    }

    /// First page with account and lead expanded.
    pub async fn list_page(&self) -> Result<Page, CrmError> {
        let params = ListParams::new()
            .per_page(self.page_size)
            .expand(LIST_EXPAND);
        self.records.list(&params).await
    }

    /// Every relation with account and lead expanded.
    pub async fn list_expanded(&self) -> Result<Vec<Value>, CrmError> {
        self.records
            .list_all(ListParams::new().expand(LIST_EXPAND))
            .await
    }

    pub async fn create(
        &self,
        request: NewAccountLeadRequest,
        today: Date,
    ) -> Result<Value, CrmError> {
        if let (Some(account_id), Some(lead_id)) = (&request.account_id, &request.lead_id) {
            let existing: Vec<AccountLead> =
                decode_all(self.records.list_all(ListParams::new()).await?)?;

            if let Some(active) = existing
                .iter()
                .find(|relation| relation.is_active_between(account_id, lead_id))
            {
                tracing::info!(
                    %account_id,
                    %lead_id,
                    relation_id = %active.id,
                    "rejecting duplicate active relation"
                );
                return Err(CrmError::ActiveRelationExists);
            }
        }

        self.records.create(&request.into_new(today)).await
    }

    /// Relations that started in the month of `today`, flattened.
    pub async fn recent(&self, today: Date) -> Result<Vec<RecentAccountLead>, CrmError> {
        let relations: Vec<AccountLead> = decode_all(
            self.records
                .list_all(ListParams::new().expand(RECENT_EXPAND))
                .await?,
        )?;

        Ok(recent_account_leads(&relations, today))
    }
}
