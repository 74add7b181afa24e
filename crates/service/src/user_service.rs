use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
use rand::rngs::OsRng;
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::{info, instrument};

use models::{errors::ModelError, user};
use crate::{domain::NewUser, errors::ServiceError};

const EMAIL_TAKEN: &str = "email already registered";

/// Create a user. The password is stored as an Argon2 hash.
#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn create_user(db: &DatabaseConnection, input: &NewUser) -> Result<user::Model, ServiceError> {
    user::validate_email(&input.email)?;
    user::validate_password(&input.password)?;
    if user::find_by_email(db, &input.email).await?.is_some() {
        return Err(ServiceError::Validation(EMAIL_TAKEN.into()));
    }
    let hash = hash_password(&input.password)?;
    match user::create(db, &input.email, &hash, input.is_active).await {
        Ok(created) => {
            info!(user_id = created.id, "user created");
            Ok(created)
        }
        // Lost a race with a concurrent insert of the same email
        Err(ModelError::Duplicate(_)) => Err(ServiceError::Validation(EMAIL_TAKEN.into())),
        Err(e) => Err(e.into()),
    }
}

/// Get a user by id.
pub async fn get_user(db: &DatabaseConnection, id: i32) -> Result<Option<user::Model>, ServiceError> {
    Ok(user::Entity::find_by_id(id).one(db).await?)
}

/// List every user ordered by id.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>, ServiceError> {
    Ok(user::all(db).await?)
}

fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| ServiceError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn new_user(email: &str) -> NewUser {
        NewUser { email: email.into(), password: "x".into(), is_active: true }
    }

    #[tokio::test]
    async fn user_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(list_users(&db).await?.is_empty());

        let u = create_user(&db, &new_user("a@b.com")).await?;
        assert_eq!(u.email, "a@b.com");
        assert!(u.password.starts_with("$argon2"));
        assert_ne!(u.password, "x");

        let found = get_user(&db, u.id).await?.unwrap();
        assert_eq!(found.id, u.id);
        assert!(get_user(&db, u.id + 100).await?.is_none());

        let json = serde_json::to_value(&found)?;
        assert!(json.get("password").is_none());
        assert_eq!(json, serde_json::json!({"id": u.id, "email": "a@b.com"}));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_a_validation_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_user(&db, &new_user("dup@b.com")).await?;

        let err = create_user(&db, &new_user("dup@b.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == EMAIL_TAKEN), "{err:?}");
        assert_eq!(list_users(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn blank_fields_are_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let mut input = new_user("  ");
        assert!(matches!(create_user(&db, &input).await, Err(ServiceError::Validation(_))));
        input.email = "ok@b.com".into();
        input.password = String::new();
        assert!(matches!(create_user(&db, &input).await, Err(ServiceError::Validation(_))));
        assert!(list_users(&db).await?.is_empty());
        Ok(())
    }
}
