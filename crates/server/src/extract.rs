//! Request payload and path parsing into typed inputs.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::ApiError;

/// `Path` whose rejection (non-numeric or out-of-range ids) is a JSON
/// `{"error": ...}` bad request instead of axum's plain-text body.
#[derive(Debug)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(IdPath(value)),
            Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
        }
    }
}

/// Parse a JSON body into `T`.
///
/// An absent body, `null` or `{}` is rejected with `empty_msg` before any field
/// checks; unparsable JSON is a bad request; a well-formed object with missing,
/// mistyped or unknown fields is a validation error.
pub fn parse_payload<T: DeserializeOwned>(body: &[u8], empty_msg: &str) -> Result<T, ApiError> {
    let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(format!("malformed JSON body: {e}")))?
    };
    let empty = match &value {
        Value::Null => true,
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    };
    if empty {
        return Err(ApiError::BadRequest(empty_msg.to_string()));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Validation(e.to_string()))
}
