use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::store::{EntityStore, SeaOrmStore};

/// Shared handler state: the storage context built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntityStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmStore::new(db)))
    }
}
