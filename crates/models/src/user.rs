use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Stored user. Serializes to `{id, email}`; the password hash and the
/// activation flag stay inside the process.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const EMAIL_MAX_LEN: usize = 120;

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let email = email.trim();
    if email.is_empty() { return Err(ModelError::Validation("email required".into())); }
    if !email.contains('@') { return Err(ModelError::Validation("invalid email".into())); }
    if email.len() > EMAIL_MAX_LEN { return Err(ModelError::Validation(format!("email longer than {EMAIL_MAX_LEN} characters"))); }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ModelError> {
    if password.is_empty() { return Err(ModelError::Validation("password required".into())); }
    Ok(())
}

/// Insert a user. `password_hash` must already be hashed by the caller.
pub async fn create<C: ConnectionTrait>(db: &C, email: &str, password_hash: &str, is_active: bool) -> Result<Model, ModelError> {
    validate_email(email)?;
    if password_hash.is_empty() { return Err(ModelError::Validation("password required".into())); }
    let am = ActiveModel {
        email: Set(email.trim().to_string()),
        password: Set(password_hash.to_string()),
        is_active: Set(is_active),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email.trim())).one(db).await?)
}

pub async fn all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}
