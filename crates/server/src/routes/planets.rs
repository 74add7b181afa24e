use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use models::planet;
use service::domain::NewPlanet;

use crate::errors::ApiError;
use crate::extract::{parse_payload, IdPath};
use crate::routes::Created;
use crate::state::AppState;

#[utoipa::path(get, path = "/planet", tag = "planet", responses((status = 200, description = "All planets")))]
pub async fn list_planets(State(state): State<AppState>) -> Result<Json<Vec<planet::Model>>, ApiError> {
    Ok(Json(state.store.list_planets().await?))
}

#[utoipa::path(
    get, path = "/planet/{id}", tag = "planet",
    params(("id" = i32, Path, description = "Planet id")),
    responses((status = 200, description = "Planet as {id, name}"), (status = 400, description = "Planet not found"))
)]
pub async fn get_planet(State(state): State<AppState>, IdPath(id): IdPath<i32>) -> Result<Json<planet::Model>, ApiError> {
    state
        .store
        .get_planet(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::BadRequest("Planet not found".into()))
}

#[utoipa::path(
    post, path = "/planet", tag = "planet",
    request_body = crate::openapi::NamedDoc,
    responses((status = 201, description = "Planet created"), (status = 400, description = "Missing or blank name"))
)]
pub async fn create_planet(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Created<NewPlanet>>), ApiError> {
    let input: NewPlanet = parse_payload(&body, "You need to fill the name of the planet")?;
    let created = state.store.create_planet(&input).await?;
    // Echo the stored values, which are trimmed
    let echo = NewPlanet { name: created.name.clone() };
    Ok((StatusCode::CREATED, Json(Created::new("Planet created", echo, created.id))))
}
