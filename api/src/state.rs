//! Application state

use std::sync::Arc;

use user_crud_core::bootstrap::{bootstrap, StartupError};
use user_crud_core::store::{PostgresUserStore, UserStore};

use crate::config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// User storage
    pub store: Arc<dyn UserStore>,
    /// Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Bootstrap the database and build state over the PostgreSQL store
    pub async fn new(config: &AppConfig) -> Result<Self, StartupError> {
        let pool = bootstrap(&config.database_url(), config.schema_mode()).await?;

        Ok(Self::with_store(
            Arc::new(PostgresUserStore::new(pool)),
            config.clone(),
        ))
    }

    /// Build state over any store implementation
    pub fn with_store(store: Arc<dyn UserStore>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

