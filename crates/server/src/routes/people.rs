use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use models::person;
use service::domain::NewPerson;

use crate::errors::ApiError;
use crate::extract::{parse_payload, IdPath};
use crate::routes::Created;
use crate::state::AppState;

#[utoipa::path(get, path = "/people", tag = "people", responses((status = 200, description = "All people")))]
pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<person::Model>>, ApiError> {
    Ok(Json(state.store.list_people().await?))
}

#[utoipa::path(
    get, path = "/people/{id}", tag = "people",
    params(("id" = i32, Path, description = "Person id")),
    responses((status = 200, description = "Person as {id, name}"), (status = 400, description = "Person not found"))
)]
pub async fn get_person(State(state): State<AppState>, IdPath(id): IdPath<i32>) -> Result<Json<person::Model>, ApiError> {
    state
        .store
        .get_person(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::BadRequest("Person not found".into()))
}

#[utoipa::path(
    post, path = "/people", tag = "people",
    request_body = crate::openapi::NamedDoc,
    responses((status = 201, description = "Person created"), (status = 400, description = "Missing or blank name"))
)]
pub async fn create_person(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Created<NewPerson>>), ApiError> {
    let input: NewPerson = parse_payload(&body, "You need to fill the name of the person")?;
    let created = state.store.create_person(&input).await?;
    // Echo the stored values, which are trimmed
    let echo = NewPerson { name: created.name.clone() };
    Ok((StatusCode::CREATED, Json(Created::new("Person created", echo, created.id))))
}
