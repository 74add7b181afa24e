use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("duplicate row: {0}")]
    Duplicate(String),
    #[error("missing referenced row: {0}")]
    MissingReference(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => ModelError::Duplicate(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => ModelError::MissingReference(msg),
            _ => ModelError::Db(e.to_string()),
        }
    }
}
