use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use common::types::Message;
use service::domain::{FavoriteKind, Favorites};
use service::errors::ServiceError;

use crate::errors::ApiError;
use crate::extract::IdPath;
use crate::state::AppState;

type Reply = Result<(StatusCode, Json<Message>), ApiError>;

#[utoipa::path(
    get, path = "/{user_id}/favorites", tag = "favorites",
    params(("user_id" = i32, Path, description = "User id")),
    responses((status = 200, description = "Favorite planets and people"), (status = 400, description = "User not found"))
)]
pub async fn list_favorites(State(state): State<AppState>, IdPath(user_id): IdPath<i32>) -> Result<Json<Favorites>, ApiError> {
    match state.store.list_favorites(user_id).await {
        Ok(favs) => Ok(Json(favs)),
        Err(ServiceError::NotFound(m)) => Err(ApiError::BadRequest(m)),
        Err(e) => Err(e.into()),
    }
}

async fn add(state: &AppState, user_id: i32, kind: FavoriteKind, target_id: i32) -> Reply {
    state.store.add_favorite(user_id, kind, target_id).await?;
    Ok((StatusCode::CREATED, Json(Message::new(format!("{} added successfully", kind.label())))))
}

async fn remove(state: &AppState, user_id: i32, kind: FavoriteKind, target_id: i32) -> Reply {
    state.store.remove_favorite(user_id, kind, target_id).await?;
    // 201 rather than 200/204, kept for client compatibility
    Ok((StatusCode::CREATED, Json(Message::new(format!("{} deleted successfully", kind.label())))))
}

#[utoipa::path(
    post, path = "/{user_id}/favorite/planet/{planet_id}", tag = "favorites",
    params(("user_id" = i32, Path, description = "User id"), ("planet_id" = i32, Path, description = "Planet id")),
    responses(
        (status = 201, description = "Planet added successfully"),
        (status = 404, description = "User or planet not found"),
        (status = 400, description = "Planet already added as favorite")
    )
)]
pub async fn add_favorite_planet(State(state): State<AppState>, IdPath((user_id, planet_id)): IdPath<(i32, i32)>) -> Reply {
    add(&state, user_id, FavoriteKind::Planet, planet_id).await
}

#[utoipa::path(
    post, path = "/{user_id}/favorite/people/{people_id}", tag = "favorites",
    params(("user_id" = i32, Path, description = "User id"), ("people_id" = i32, Path, description = "Person id")),
    responses(
        (status = 201, description = "Person added successfully"),
        (status = 404, description = "User or person not found"),
        (status = 400, description = "Person already added as favorite")
    )
)]
pub async fn add_favorite_person(State(state): State<AppState>, IdPath((user_id, people_id)): IdPath<(i32, i32)>) -> Reply {
    add(&state, user_id, FavoriteKind::Person, people_id).await
}

#[utoipa::path(
    delete, path = "/{user_id}/favorite/planet/{planet_id}", tag = "favorites",
    params(("user_id" = i32, Path, description = "User id"), ("planet_id" = i32, Path, description = "Planet id")),
    responses((status = 201, description = "Planet deleted successfully"), (status = 404, description = "User, planet or link not found"))
)]
pub async fn remove_favorite_planet(State(state): State<AppState>, IdPath((user_id, planet_id)): IdPath<(i32, i32)>) -> Reply {
    remove(&state, user_id, FavoriteKind::Planet, planet_id).await
}

#[utoipa::path(
    delete, path = "/{user_id}/favorite/people/{people_id}", tag = "favorites",
    params(("user_id" = i32, Path, description = "User id"), ("people_id" = i32, Path, description = "Person id")),
    responses((status = 201, description = "Person deleted successfully"), (status = 404, description = "User, person or link not found"))
)]
pub async fn remove_favorite_person(State(state): State<AppState>, IdPath((user_id, people_id)): IdPath<(i32, i32)>) -> Reply {
    remove(&state, user_id, FavoriteKind::Person, people_id).await
}
