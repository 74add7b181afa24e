//! Create `user_favorite_planets` join table.
//!
//! The composite primary key keeps a (user, planet) pair unique. Foreign keys
//! restrict deletes so removing a link never touches the rows it points at.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoritePlanets::Table)
                    .if_not_exists()
                    .col(integer(UserFavoritePlanets::UserId).not_null())
                    .col(integer(UserFavoritePlanets::PlanetId).not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_user_favorite_planets")
                            .col(UserFavoritePlanets::UserId)
                            .col(UserFavoritePlanets::PlanetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_planets_user")
                            .from(UserFavoritePlanets::Table, UserFavoritePlanets::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_planets_planet")
                            .from(UserFavoritePlanets::Table, UserFavoritePlanets::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserFavoritePlanets::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserFavoritePlanets { Table, UserId, PlanetId }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Planet { Table, Id }
