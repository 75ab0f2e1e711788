use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::store::{ProfileStore, SharedProfileStore};

#[derive(Clone)]
pub struct AppState {
    pub store: SharedProfileStore,
    pub config: Arc<AppConfig>,
    pub loaded_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: ProfileStore, config: AppConfig) -> Self {
        Self {
            store: store.into_shared(),
            config: Arc::new(config),
            loaded_at: Utc::now(),
        }
    }
}
