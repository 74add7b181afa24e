//! Storage context injected into request handlers.

use async_trait::async_trait;
use models::{person, planet, user};

use crate::domain::{FavoriteKind, FavoriteLink, Favorites, NewPerson, NewPlanet, NewUser};
use crate::errors::ServiceError;

pub mod seaorm;

pub use seaorm::SeaOrmStore;

/// Entity store abstraction. Lookups by id return `Ok(None)` for absent rows;
/// favorite operations report absent rows as `ServiceError::NotFound`.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn list_users(&self) -> Result<Vec<user::Model>, ServiceError>;
    async fn get_user(&self, id: i32) -> Result<Option<user::Model>, ServiceError>;
    async fn create_user(&self, input: &NewUser) -> Result<user::Model, ServiceError>;

    async fn list_planets(&self) -> Result<Vec<planet::Model>, ServiceError>;
    async fn get_planet(&self, id: i32) -> Result<Option<planet::Model>, ServiceError>;
    async fn create_planet(&self, input: &NewPlanet) -> Result<planet::Model, ServiceError>;

    async fn list_people(&self) -> Result<Vec<person::Model>, ServiceError>;
    async fn get_person(&self, id: i32) -> Result<Option<person::Model>, ServiceError>;
    async fn create_person(&self, input: &NewPerson) -> Result<person::Model, ServiceError>;

    async fn list_favorites(&self, user_id: i32) -> Result<Favorites, ServiceError>;
    async fn add_favorite(&self, user_id: i32, kind: FavoriteKind, target_id: i32) -> Result<FavoriteLink, ServiceError>;
    async fn remove_favorite(&self, user_id: i32, kind: FavoriteKind, target_id: i32) -> Result<(), ServiceError>;
}
