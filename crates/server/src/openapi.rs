use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct NewUserDoc {
    pub email: String,
    pub password: String,
    /// JSON bool or "true"/"false"; defaults to true
    pub is_active: Option<bool>,
}

#[derive(ToSchema)]
pub struct NamedDoc { pub name: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::sitemap,
        crate::routes::users::list_users,
        crate::routes::users::get_user,
        crate::routes::users::create_user,
        crate::routes::planets::list_planets,
        crate::routes::planets::get_planet,
        crate::routes::planets::create_planet,
        crate::routes::people::list_people,
        crate::routes::people::get_person,
        crate::routes::people::create_person,
        crate::routes::favorites::list_favorites,
        crate::routes::favorites::add_favorite_planet,
        crate::routes::favorites::add_favorite_person,
        crate::routes::favorites::remove_favorite_planet,
        crate::routes::favorites::remove_favorite_person,
    ),
    components(schemas(NewUserDoc, NamedDoc)),
    tags(
        (name = "health"),
        (name = "user"),
        (name = "planet"),
        (name = "people"),
        (name = "favorites")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_entity_path() {
        let doc = ApiDoc::openapi();
        for path in ["/user", "/user/{id}", "/planet/{id}", "/people", "/{user_id}/favorites", "/{user_id}/favorite/planet/{planet_id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
