use sea_orm::{entity::prelude::*, ConnectionTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{person, user};

/// Row of `user_favorite_people`: one user marking one person as favorite.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_favorite_people")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub people_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User, Person }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::Person => Entity::belongs_to(person::Entity).from(Column::PeopleId).to(person::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find<C: ConnectionTrait>(db: &C, user_id: i32, target_id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id((user_id, target_id)).one(db).await?)
}

/// Insert the link row. A second insert of the same pair fails with `ModelError::Duplicate`.
pub async fn insert<C: ConnectionTrait>(db: &C, user_id: i32, target_id: i32) -> Result<Model, ModelError> {
    let am = ActiveModel { user_id: Set(user_id), people_id: Set(target_id) };
    Entity::insert(am).exec_without_returning(db).await?;
    Ok(Model { user_id, people_id: target_id })
}

/// Delete exactly the (user, target) row; returns the number of rows removed.
pub async fn delete<C: ConnectionTrait>(db: &C, user_id: i32, target_id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id((user_id, target_id)).exec(db).await?;
    Ok(res.rows_affected)
}

pub async fn target_ids_for_user<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<Vec<i32>, ModelError> {
    let ids = Entity::find()
        .select_only()
        .column(Column::PeopleId)
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::PeopleId)
        .into_tuple::<i32>()
        .all(db)
        .await?;
    Ok(ids)
}

pub async fn count_for_user<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<u64, ModelError> {
    Ok(Entity::find().filter(Column::UserId.eq(user_id)).count(db).await?)
}
