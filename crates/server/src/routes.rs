use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{Health, Sitemap};

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;

/// Every route the router serves, as listed by the sitemap.
pub const ENDPOINTS: &[&str] = &[
    "GET /",
    "GET /health",
    "GET /api-docs/openapi.json",
    "GET /user",
    "POST /user",
    "GET /user/{id}",
    "GET /people",
    "POST /people",
    "GET /people/{id}",
    "GET /planet",
    "POST /planet",
    "GET /planet/{id}",
    "GET /{user_id}/favorites",
    "POST /{user_id}/favorite/planet/{planet_id}",
    "DELETE /{user_id}/favorite/planet/{planet_id}",
    "POST /{user_id}/favorite/people/{people_id}",
    "DELETE /{user_id}/favorite/people/{people_id}",
];

/// Body of a successful create: the message, the echoed input and the new row id.
#[derive(Serialize, Debug)]
pub struct Created<T> {
    pub message: String,
    pub data: T,
    pub id: i32,
}

impl<T> Created<T> {
    pub fn new(message: impl Into<String>, data: T, id: i32) -> Self {
        Self { message: message.into(), data, id }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Registered endpoints")))]
pub async fn sitemap() -> Json<Sitemap> {
    Json(Sitemap { endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect() })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router over the injected state.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let entities = Router::new()
        .route("/user", get(users::list_users).post(users::create_user))
        .route("/user/:id", get(users::get_user))
        .route("/people", get(people::list_people).post(people::create_person))
        .route("/people/:id", get(people::get_person))
        .route("/planet", get(planets::list_planets).post(planets::create_planet))
        .route("/planet/:id", get(planets::get_planet));

    let favorites = Router::new()
        .route("/:user_id/favorites", get(favorites::list_favorites))
        .route(
            "/:user_id/favorite/planet/:planet_id",
            post(favorites::add_favorite_planet).delete(favorites::remove_favorite_planet),
        )
        .route(
            "/:user_id/favorite/people/:people_id",
            post(favorites::add_favorite_person).delete(favorites::remove_favorite_person),
        );

    Router::new()
        .route("/", get(sitemap))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(entities)
        .merge(favorites)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
