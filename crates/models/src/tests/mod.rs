use sea_orm::DatabaseConnection;

use crate::db::{connect_and_migrate, memory_config};

/// Entity CRUD and constraint tests
pub mod crud_tests;


/// Fresh migrated in-memory database per test.
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    connect_and_migrate(&memory_config()).await
}
