use anyhow::Result;
use sea_orm::EntityTrait;

use super::setup_test_db;
use crate::errors::ModelError;
use crate::{person, planet, user};

#[tokio::test]
async fn test_user_create_and_find() -> Result<()> {
    let db = setup_test_db().await?;

    let created = user::create(&db, "luke@tatooine.org", "$argon2id$stub", true).await?;
    assert!(created.id > 0);
    assert_eq!(created.email, "luke@tatooine.org");
    assert!(created.is_active);

    let found = user::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert_eq!(found, created);

    let by_email = user::find_by_email(&db, "luke@tatooine.org").await?;
    assert_eq!(by_email.map(|u| u.id), Some(created.id));
    Ok(())
}

#[tokio::test]
async fn test_user_serialization_hides_password() -> Result<()> {
    let db = setup_test_db().await?;
    let created = user::create(&db, "leia@alderaan.org", "secret-hash", false).await?;

    let json = serde_json::to_value(&created)?;
    assert_eq!(json, serde_json::json!({"id": created.id, "email": "leia@alderaan.org"}));
    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_is_rejected_by_unique_index() -> Result<()> {
    let db = setup_test_db().await?;
    user::create(&db, "han@falcon.io", "h1", true).await?;

    let err = user::create(&db, "han@falcon.io", "h2", true).await.unwrap_err();
    assert!(matches!(err, ModelError::Duplicate(_) | ModelError::Db(_)), "unexpected error: {err:?}");
    assert_eq!(user::all(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_user_validation() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(matches!(user::create(&db, "", "h", true).await, Err(ModelError::Validation(_))));
    assert!(matches!(user::create(&db, "no-at-sign", "h", true).await, Err(ModelError::Validation(_))));
    assert!(matches!(user::create(&db, "a@b.com", "", true).await, Err(ModelError::Validation(_))));
    assert!(user::all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_planet_and_person_crud() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(planet::all(&db).await?.is_empty());

    let tatooine = planet::create(&db, "Tatooine").await?;
    let hoth = planet::create(&db, "  Hoth ").await?;
    assert_eq!(hoth.name, "Hoth");
    let names: Vec<_> = planet::all(&db).await?.into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Tatooine", "Hoth"]);

    let json = serde_json::to_value(&tatooine)?;
    assert_eq!(json, serde_json::json!({"id": tatooine.id, "name": "Tatooine"}));

    let yoda = person::create(&db, "Yoda").await?;
    let found = person::Entity::find_by_id(yoda.id).one(&db).await?;
    assert_eq!(found.map(|p| p.name), Some("Yoda".to_string()));

    assert!(matches!(planet::create(&db, "   ").await, Err(ModelError::Validation(_))));
    assert!(matches!(person::create(&db, &"x".repeat(251)).await, Err(ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn test_by_ids_filters_and_orders() -> Result<()> {
    let db = setup_test_db().await?;
    let a = person::create(&db, "Anakin").await?;
    let _b = person::create(&db, "Boba").await?;
    let c = person::create(&db, "Chewbacca").await?;

    let picked = person::by_ids(&db, vec![c.id, a.id]).await?;
    assert_eq!(picked.into_iter().map(|p| p.id).collect::<Vec<_>>(), vec![a.id, c.id]);
    assert!(person::by_ids(&db, vec![]).await?.is_empty());
    Ok(())
}
