use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Text without the category prefix, for response bodies.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::NotFound(m) | Self::Conflict(m) | Self::Db(m) | Self::Internal(m) => m,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => Self::Validation(m),
            ModelError::Duplicate(m) => Self::Conflict(m),
            ModelError::MissingReference(m) => Self::NotFound(m),
            ModelError::Db(m) => Self::Db(m),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { ModelError::from(e).into() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_keep_their_category() {
        assert!(matches!(ServiceError::from(ModelError::Validation("x".into())), ServiceError::Validation(_)));
        assert!(matches!(ServiceError::from(ModelError::Duplicate("x".into())), ServiceError::Conflict(_)));
        assert!(matches!(ServiceError::from(ModelError::MissingReference("x".into())), ServiceError::NotFound(_)));
    }

    #[test]
    fn message_strips_prefix() {
        let e = ServiceError::not_found("Planet");
        assert_eq!(e.to_string(), "not found: Planet not found");
        assert_eq!(e.message(), "Planet not found");
    }
}
