use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Every failure leaves the server as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Absent or malformed body, or a lookup by id that found nothing.
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            // Duplicate favorites answer 400 in the published contract
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody { error: msg })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(m) => ApiError::Validation(m),
            ServiceError::NotFound(m) => ApiError::NotFound(m),
            ServiceError::Conflict(m) => ApiError::Conflict(m),
            ServiceError::Db(m) | ServiceError::Internal(m) => ApiError::Internal(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_is_404_with_error_field() {
        let (status, body) = body_of(ApiError::NotFound("Planet not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": "Planet not found"}));
    }

    #[tokio::test]
    async fn conflict_and_validation_are_400() {
        assert_eq!(ApiError::Conflict("dup".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Validation("bad".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::BadRequest("empty".into()).status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn internal_hides_details() {
        let (status, body) = body_of(ApiError::Internal("connection reset".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal server error");
    }

    #[test]
    fn service_errors_map_by_category() {
        assert!(matches!(ApiError::from(ServiceError::not_found("User")), ApiError::NotFound(ref m) if m == "User not found"));
        assert!(matches!(ApiError::from(ServiceError::Conflict("x".into())), ApiError::Conflict(_)));
        assert!(matches!(ApiError::from(ServiceError::Db("x".into())), ApiError::Internal(_)));
    }
}
