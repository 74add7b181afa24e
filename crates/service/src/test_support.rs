#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::db::{connect_and_migrate, memory_config};

/// Fresh in-memory database with the schema applied; nothing is shared between tests.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    connect_and_migrate(&memory_config()).await
}
