//! Application state - Dependency injection container.
//!
//! Built once at startup and handed to every request through axum's
//! `State` extractor; nothing here lives in a global.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{CatStore, Database};
use crate::services::{CatManager, CatService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Cat service
    pub cat_service: Arc<dyn CatService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Runtime configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state from a connected database and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let store = Arc::new(CatStore::new(database.get_connection()));
        let cat_service = Arc::new(CatManager::new(store));

        Self::new(cat_service, database, config)
    }

    /// Create new application state with manually injected services.
    pub fn new(cat_service: Arc<dyn CatService>, database: Arc<Database>, config: Config) -> Self {
        Self {
            cat_service,
            database,
            config: Arc::new(config),
        }
    }
}
