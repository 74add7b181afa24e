//! Service layer: the entity store behind the HTTP handlers.
//! - Typed request inputs and favorite rules live here, not in `models`.
//! - `store::EntityStore` is the seam handlers depend on.

pub mod errors;
pub mod domain;
pub mod user_service;
pub mod planet_service;
pub mod person_service;
pub mod favorite_service;
pub mod store;
#[cfg(test)]
pub mod test_support;
