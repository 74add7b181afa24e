//! Favorite links between users and planets/people.
//!
//! Each add/remove runs in its own transaction: existence checks and the
//! link write commit together or not at all. The composite primary key of the
//! join table is the final guard against concurrent duplicates.

use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::{info, instrument};

use models::{errors::ModelError, favorite_person, favorite_planet, person, planet, user};
use crate::domain::{FavoriteKind, FavoriteLink, Favorites};
use crate::errors::ServiceError;

async fn ensure_user<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<(), ServiceError> {
    user::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or_else(|| ServiceError::not_found("User"))
}

async fn ensure_target<C: ConnectionTrait>(db: &C, kind: FavoriteKind, target_id: i32) -> Result<(), ServiceError> {
    let exists = match kind {
        FavoriteKind::Planet => planet::Entity::find_by_id(target_id).one(db).await?.is_some(),
        FavoriteKind::Person => person::Entity::find_by_id(target_id).one(db).await?.is_some(),
    };
    if exists { Ok(()) } else { Err(ServiceError::not_found(kind.label())) }
}

async fn link_exists<C: ConnectionTrait>(db: &C, kind: FavoriteKind, user_id: i32, target_id: i32) -> Result<bool, ServiceError> {
    let found = match kind {
        FavoriteKind::Planet => favorite_planet::find(db, user_id, target_id).await?.is_some(),
        FavoriteKind::Person => favorite_person::find(db, user_id, target_id).await?.is_some(),
    };
    Ok(found)
}

fn already_added(kind: FavoriteKind) -> ServiceError {
    ServiceError::Conflict(format!("{} already added as favorite", kind.label()))
}

/// Favorite planets and people of a user, each ordered by id.
pub async fn list_favorites(db: &DatabaseConnection, user_id: i32) -> Result<Favorites, ServiceError> {
    ensure_user(db, user_id).await?;
    let planet_ids = favorite_planet::target_ids_for_user(db, user_id).await?;
    let people_ids = favorite_person::target_ids_for_user(db, user_id).await?;
    Ok(Favorites {
        planets: planet::by_ids(db, planet_ids).await?,
        people: person::by_ids(db, people_ids).await?,
    })
}

/// Insert the (user, target) link row.
#[instrument(skip(db))]
pub async fn add_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    kind: FavoriteKind,
    target_id: i32,
) -> Result<FavoriteLink, ServiceError> {
    let txn = db.begin().await?;
    ensure_user(&txn, user_id).await?;
    ensure_target(&txn, kind, target_id).await?;
    if link_exists(&txn, kind, user_id, target_id).await? {
        return Err(already_added(kind));
    }

    let inserted = match kind {
        FavoriteKind::Planet => favorite_planet::insert(&txn, user_id, target_id).await.map(|_| ()),
        FavoriteKind::Person => favorite_person::insert(&txn, user_id, target_id).await.map(|_| ()),
    };
    match inserted {
        Ok(()) => {}
        Err(ModelError::Duplicate(_)) => return Err(already_added(kind)),
        Err(e) => return Err(e.into()),
    }
    txn.commit().await?;

    info!(user_id, target_id, kind = kind.label(), "favorite added");
    Ok(FavoriteLink { user_id, kind, target_id })
}

/// Delete exactly the (user, target) link row. The user and target rows stay.
#[instrument(skip(db))]
pub async fn remove_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    kind: FavoriteKind,
    target_id: i32,
) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    ensure_user(&txn, user_id).await?;
    ensure_target(&txn, kind, target_id).await?;

    let removed = match kind {
        FavoriteKind::Planet => favorite_planet::delete(&txn, user_id, target_id).await?,
        FavoriteKind::Person => favorite_person::delete(&txn, user_id, target_id).await?,
    };
    if removed == 0 {
        return Err(ServiceError::NotFound(format!("{} not present on {}", kind.label(), kind.list_name())));
    }
    txn.commit().await?;

    info!(user_id, target_id, kind = kind.label(), "favorite removed");
    Ok(())
}
