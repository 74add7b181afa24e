use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const NAME_MAX_LEN: usize = 250;

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() { return Err(ModelError::Validation("name required".into())); }
    if name.chars().count() > NAME_MAX_LEN { return Err(ModelError::Validation(format!("name longer than {NAME_MAX_LEN} characters"))); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        name: Set(name.trim().to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

/// Rows whose id is in `ids`, ordered by id.
pub async fn by_ids<C: ConnectionTrait>(db: &C, ids: Vec<i32>) -> Result<Vec<Model>, ModelError> {
    if ids.is_empty() { return Ok(Vec::new()); }
    Ok(Entity::find().filter(Column::Id.is_in(ids)).order_by_asc(Column::Id).all(db).await?)
}
