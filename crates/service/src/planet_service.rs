use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::{info, instrument};

use models::planet;
use crate::{domain::NewPlanet, errors::ServiceError};

/// Create a planet.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_planet(db: &DatabaseConnection, input: &NewPlanet) -> Result<planet::Model, ServiceError> {
    let created = planet::create(db, &input.name).await?;
    info!(planet_id = created.id, "planet created");
    Ok(created)
}

/// Get a planet by id.
pub async fn get_planet(db: &DatabaseConnection, id: i32) -> Result<Option<planet::Model>, ServiceError> {
    Ok(planet::Entity::find_by_id(id).one(db).await?)
}

/// List every planet ordered by id.
pub async fn list_planets(db: &DatabaseConnection) -> Result<Vec<planet::Model>, ServiceError> {
    Ok(planet::all(db).await?)
}
