use std::sync::Arc;

use crate::domain::{
    models::Collection,
    ports::outbound::RecordStore,
    services::{AccountLeadService, BoardService, RecordService, TaskService},
};

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
    page_size: u32,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, page_size: u32) -> Self {
        Self { store, page_size }
    }

    pub fn records(&self, collection: Collection) -> RecordService {
        RecordService::new(self.store.clone(), collection, self.page_size)
    }

    pub fn account_leads(&self) -> AccountLeadService {
        AccountLeadService::new(self.store.clone(), self.page_size)
    }

    pub fn boards(&self) -> BoardService {
        BoardService::new(self.store.clone(), self.page_size)
    }

    pub fn tasks(&self) -> TaskService {
        TaskService::new(self.store.clone(), self.page_size)
    }
}
