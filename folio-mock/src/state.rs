//! Shared server state

use std::sync::Arc;

use crate::config::Config;
use crate::store::FolioStore;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<FolioStore>,
}

impl AppState {
    pub fn new(store: FolioStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(FolioStore::seeded(config.company_setting_ids.iter().copied()))
    }
}
