use async_trait::async_trait;
use models::{person, planet, user};
use sea_orm::DatabaseConnection;

use crate::domain::{FavoriteKind, FavoriteLink, Favorites, NewPerson, NewPlanet, NewUser};
use crate::errors::ServiceError;
use crate::store::EntityStore;
use crate::{favorite_service, person_service, planet_service, user_service};

/// SeaORM-backed store. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct SeaOrmStore {
    pub db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl EntityStore for SeaOrmStore {
    async fn list_users(&self) -> Result<Vec<user::Model>, ServiceError> {
        user_service::list_users(&self.db).await
    }

    async fn get_user(&self, id: i32) -> Result<Option<user::Model>, ServiceError> {
        user_service::get_user(&self.db, id).await
    }

    async fn create_user(&self, input: &NewUser) -> Result<user::Model, ServiceError> {
        user_service::create_user(&self.db, input).await
    }

    async fn list_planets(&self) -> Result<Vec<planet::Model>, ServiceError> {
        planet_service::list_planets(&self.db).await
    }

    async fn get_planet(&self, id: i32) -> Result<Option<planet::Model>, ServiceError> {
        planet_service::get_planet(&self.db, id).await
    }

    async fn create_planet(&self, input: &NewPlanet) -> Result<planet::Model, ServiceError> {
        planet_service::create_planet(&self.db, input).await
    }

    async fn list_people(&self) -> Result<Vec<person::Model>, ServiceError> {
        person_service::list_people(&self.db).await
    }

    async fn get_person(&self, id: i32) -> Result<Option<person::Model>, ServiceError> {
        person_service::get_person(&self.db, id).await
    }

    async fn create_person(&self, input: &NewPerson) -> Result<person::Model, ServiceError> {
        person_service::create_person(&self.db, input).await
    }

    async fn list_favorites(&self, user_id: i32) -> Result<Favorites, ServiceError> {
        favorite_service::list_favorites(&self.db, user_id).await
    }

    async fn add_favorite(&self, user_id: i32, kind: FavoriteKind, target_id: i32) -> Result<FavoriteLink, ServiceError> {
        favorite_service::add_favorite(&self.db, user_id, kind, target_id).await
    }

    async fn remove_favorite(&self, user_id: i32, kind: FavoriteKind, target_id: i32) -> Result<(), ServiceError> {
        favorite_service::remove_favorite(&self.db, user_id, kind, target_id).await
    }
}
