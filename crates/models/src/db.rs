use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    Ok(db)
}

/// Connect and bring the schema up to date.
pub async fn connect_and_migrate(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None).await?;
    info!(sqlite = cfg.is_sqlite(), "database schema up to date");
    Ok(db)
}

/// Private in-memory sqlite database. Every pooled connection would open its own
/// empty database, so the pool is pinned to exactly one connection.
pub fn memory_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Statement};

    #[tokio::test]
    async fn connects_from_config_only() -> anyhow::Result<()> {
        let db = connect_with_config(&memory_config()).await?;
        let row = db
            .query_one(Statement::from_string(db.get_database_backend(), "SELECT 1 AS one"))
            .await?;
        assert!(row.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_url_is_an_error() {
        let cfg = DatabaseConfig { url: "sqlite:///nonexistent-dir/db.sqlite".into(), ..memory_config() };
        assert!(connect_with_config(&cfg).await.is_err());
    }
}
