use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use models::user;
use service::domain::NewUser;

use crate::errors::ApiError;
use crate::extract::{parse_payload, IdPath};
use crate::routes::Created;
use crate::state::AppState;

#[utoipa::path(get, path = "/user", tag = "user", responses((status = 200, description = "All users as {id, email}")))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<user::Model>>, ApiError> {
    Ok(Json(state.store.list_users().await?))
}

#[utoipa::path(
    get, path = "/user/{id}", tag = "user",
    params(("id" = i32, Path, description = "User id")),
    responses((status = 200, description = "User as {id, email}"), (status = 400, description = "User not found"))
)]
pub async fn get_user(State(state): State<AppState>, IdPath(id): IdPath<i32>) -> Result<Json<user::Model>, ApiError> {
    state
        .store
        .get_user(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::BadRequest("User not found".into()))
}

#[utoipa::path(
    post, path = "/user", tag = "user",
    request_body = crate::openapi::NewUserDoc,
    responses((status = 201, description = "User created"), (status = 400, description = "Missing fields or email already registered"))
)]
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Created<NewUser>>), ApiError> {
    let input: NewUser = parse_payload(&body, "You need to fill the fields to create an user")?;
    let created = state.store.create_user(&input).await?;
    // Echo the stored values, which are trimmed
    let echo = NewUser { email: created.email.clone(), is_active: created.is_active, ..input };
    Ok((StatusCode::CREATED, Json(Created::new("User created", echo, created.id))))
}
