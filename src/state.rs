use std::sync::Arc;

use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::store::ClothingStore;

/// The shared application state.
///
/// Cloned into every handler by Axum. Holds the only storage handle of the
/// process; there is no module-level database global.
#[derive(Clone)]
pub struct AppState {
    /// Storage for clothing items (wraps the SQLite pool).
    pub store: ClothingStore,
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// Request counters exposed on `/metrics`.
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(db: sqlx::SqlitePool, config: AppConfig) -> Self {
        Self { store: ClothingStore::new(db), config: Arc::new(config), metrics: Metrics::new() }
    }
}
