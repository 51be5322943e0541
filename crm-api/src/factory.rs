//! Composition root: the only place that builds the concrete record store adapter.

use std::{sync::Arc, time::Duration};

use record_store::{RecordStoreClient, RecordStoreError};

use crate::{
    adapters::outbound::record_store::RecordStoreAdapter, config::RecordStoreSettings,
    domain::ports::outbound::RecordStore,
};

pub fn create_record_store(
    settings: &RecordStoreSettings,
) -> Result<Arc<dyn RecordStore>, RecordStoreError> {
    let client = match settings.timeout_secs {
        Some(secs) => {
            RecordStoreClient::with_timeout(settings.base_url.clone(), Duration::from_secs(secs))?
        }
        None => RecordStoreClient::new(settings.base_url.clone()),
    };

    tracing::info!(base_url = %client.base_url(), "using record store");
    Ok(Arc::new(RecordStoreAdapter::new(client)))
}
