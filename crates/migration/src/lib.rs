//! Migrator registering entity tables before the join tables that reference them.
pub use sea_orm_migration::prelude::*;

mod m20240909_000001_create_user;
mod m20240909_000002_create_planet;
mod m20240909_000003_create_people;
mod m20240909_000004_create_user_favorite_planets;
mod m20240909_000005_create_user_favorite_people;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240909_000001_create_user::Migration),
            Box::new(m20240909_000002_create_planet::Migration),
            Box::new(m20240909_000003_create_people::Migration),
            // Join tables last: both reference user and their target table
            Box::new(m20240909_000004_create_user_favorite_planets::Migration),
            Box::new(m20240909_000005_create_user_favorite_people::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, Database};

    #[tokio::test]
    async fn up_and_down_on_memory_sqlite() -> Result<(), DbErr> {
        // A single pooled connection keeps one in-memory database alive
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1);
        let db = Database::connect(opt).await?;
        Migrator::up(&db, None).await?;

        let manager = SchemaManager::new(&db);
        for table in ["user", "planet", "people", "user_favorite_planets", "user_favorite_people"] {
            assert!(manager.has_table(table).await?, "missing table {table}");
        }
        assert!(manager.has_column("user", "is_active").await?);
        assert!(manager.has_column("user_favorite_people", "people_id").await?);

        Migrator::down(&db, None).await?;
        assert!(!manager.has_table("user").await?);
        Ok(())
    }
}
