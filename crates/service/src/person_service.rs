use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::{info, instrument};

use models::person;
use crate::{domain::NewPerson, errors::ServiceError};

/// Create a person.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_person(db: &DatabaseConnection, input: &NewPerson) -> Result<person::Model, ServiceError> {
    let created = person::create(db, &input.name).await?;
    info!(person_id = created.id, "person created");
    Ok(created)
}

/// Get a person by id.
pub async fn get_person(db: &DatabaseConnection, id: i32) -> Result<Option<person::Model>, ServiceError> {
    Ok(person::Entity::find_by_id(id).one(db).await?)
}

/// List every person ordered by id.
pub async fn list_people(db: &DatabaseConnection) -> Result<Vec<person::Model>, ServiceError> {
    Ok(person::all(db).await?)
}
