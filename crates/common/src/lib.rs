//! Pieces shared by the server crate and the binary: logging setup,
//! response bodies that are not tied to an entity, and startup helpers.

pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_serializes_as_single_field() {
        let m = types::Message::new("Planet added successfully");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Planet added successfully"}));
    }
}
