//! Typed request inputs and the shapes returned by favorite operations.

use models::{person, planet};
use serde::{Deserialize, Serialize};

/// Which join table a favorite operation touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Planet,
    Person,
}

impl FavoriteKind {
    pub fn label(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "Planet",
            FavoriteKind::Person => "Person",
        }
    }

    pub fn list_name(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "favorite planets list",
            FavoriteKind::Person => "favorite people list",
        }
    }
}

/// `POST /user` body. Re-serializing it (the echo in the create response)
/// never includes the password.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NewUser {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(default = "active_by_default", deserialize_with = "flag::deserialize")]
    pub is_active: bool,
}

fn active_by_default() -> bool { true }

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NewPlanet {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NewPerson {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Favorites {
    #[serde(rename = "favorite Planets")]
    pub planets: Vec<planet::Model>,
    #[serde(rename = "favorite People")]
    pub people: Vec<person::Model>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FavoriteLink {
    pub user_id: i32,
    pub kind: FavoriteKind,
    pub target_id: i32,
}

/// Activation flag as sent by clients: a JSON bool or the strings "true"/"false".
mod flag {
    use std::fmt;

    use serde::de::{self, Deserializer, Visitor};

    const EXPECTED: &str = "is_active must be true or false";

    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str(EXPECTED)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            match v.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(E::custom(format!("{EXPECTED}, got {other:?}"))),
            }
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        d.deserialize_any(FlagVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_user_accepts_string_flag() {
        let u: NewUser = serde_json::from_value(json!({"is_active": "true", "email": "a@b.com", "password": "x"})).unwrap();
        assert!(u.is_active);
        let u: NewUser = serde_json::from_value(json!({"is_active": "FALSE", "email": "a@b.com", "password": "x"})).unwrap();
        assert!(!u.is_active);
    }

    #[test]
    fn new_user_flag_defaults_to_active() {
        let u: NewUser = serde_json::from_value(json!({"email": "a@b.com", "password": "x"})).unwrap();
        assert!(u.is_active);
    }

    #[test]
    fn new_user_rejects_bad_flag_missing_and_extra_fields() {
        assert!(serde_json::from_value::<NewUser>(json!({"email": "a@b.com", "password": "x", "is_active": "maybe"})).is_err());
        assert!(serde_json::from_value::<NewUser>(json!({"email": "a@b.com"})).is_err());
        assert!(serde_json::from_value::<NewUser>(json!({"email": "a@b.com", "password": "x", "admin": true})).is_err());
    }

    #[test]
    fn numeric_or_null_flag_names_the_field() {
        for flag in [json!(1), json!(null), json!(["true"])] {
            let err = serde_json::from_value::<NewUser>(json!({"email": "a@b.com", "password": "x", "is_active": flag}))
                .unwrap_err()
                .to_string();
            assert!(err.contains("is_active must be true or false"), "{err}");
        }
        let err = serde_json::from_value::<NewUser>(json!({"email": "a@b.com", "password": "x", "is_active": "maybe"}))
            .unwrap_err()
            .to_string();
        assert!(err.contains("is_active must be true or false, got \"maybe\""), "{err}");
    }

    #[test]
    fn echo_never_contains_password() {
        let u = NewUser { email: "a@b.com".into(), password: "hunter2".into(), is_active: true };
        assert_eq!(serde_json::to_value(&u).unwrap(), json!({"email": "a@b.com", "is_active": true}));
    }

    #[test]
    fn favorites_use_wire_keys() {
        let f = Favorites { planets: vec![planet::Model { id: 1, name: "Hoth".into() }], people: vec![] };
        assert_eq!(
            serde_json::to_value(&f).unwrap(),
            json!({"favorite Planets": [{"id": 1, "name": "Hoth"}], "favorite People": []})
        );
    }
}
