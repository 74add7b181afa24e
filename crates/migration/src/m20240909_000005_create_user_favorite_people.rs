//! Create `user_favorite_people` join table; same shape as the planet one.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoritePeople::Table)
                    .if_not_exists()
                    .col(integer(UserFavoritePeople::UserId).not_null())
                    .col(integer(UserFavoritePeople::PeopleId).not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_user_favorite_people")
                            .col(UserFavoritePeople::UserId)
                            .col(UserFavoritePeople::PeopleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_people_user")
                            .from(UserFavoritePeople::Table, UserFavoritePeople::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_people_people")
                            .from(UserFavoritePeople::Table, UserFavoritePeople::PeopleId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserFavoritePeople::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserFavoritePeople { Table, UserId, PeopleId }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum People { Table, Id }
