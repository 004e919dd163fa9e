//! Error translation for the notes service
//!
//! Every handler failure funnels through [`ApiError`]. Only malformed ids,
//! validation failures and missing records are translated into structured
//! responses; anything else falls through to [`fallback_response`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DatabaseError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Body sent back for ids that do not have the shape of a record id
pub const MALFORMED_ID_MESSAGE: &str = "malformatted id";

/// Custom error type for the notes service
#[derive(Error, Debug)]
pub enum ApiError {
    /// The id in the path is not shaped like a record id
    #[error("malformatted id")]
    MalformedId,

    /// Schema or uniqueness constraint violated; the message is sent verbatim
    #[error("{0}")]
    Validation(String),

    /// Well-formed id, no matching record
    #[error("Not found")]
    NotFound,

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(DatabaseError),
}

/// The closed set of failure kinds the translator distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedReference,
    Validation,
    NotFound,
    Other,
}

impl ApiError {
    /// Get the kind of this failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::MalformedId => ErrorKind::MalformedReference,
            ApiError::Validation(_) => ErrorKind::Validation,
            ApiError::NotFound => ErrorKind::NotFound,
            ApiError::Internal(_) | ApiError::Database(_) => ErrorKind::Other,
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::UniqueViolation { field, value } => ApiError::Validation(format!(
                "User validation failed: {field}: Error, expected `{field}` to be unique. Value: `{value}`"
            )),
            other => ApiError::Database(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.kind() {
            ErrorKind::MalformedReference => {
                warn!("{}", self);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": MALFORMED_ID_MESSAGE })),
                )
                    .into_response()
            }
            ErrorKind::Validation => {
                warn!("{}", self);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": self.to_string() })),
                )
                    .into_response()
            }
            ErrorKind::NotFound => StatusCode::NOT_FOUND.into_response(),
            ErrorKind::Other => fallback_response(&self),
        }
    }
}

/// Generic handler for failures the translator does not recognize
///
/// The failure is logged and answered with a bare plain-text 500.
pub fn fallback_response(err: &ApiError) -> Response {
    error!("Unhandled failure: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_malformed_id_response() {
        let response = ApiError::MalformedId.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, r#"{"error":"malformatted id"}"#);
    }

    #[tokio::test]
    async fn test_validation_message_is_passed_through() {
        let response = ApiError::Validation("content is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        assert_eq!(body_text(response).await, r#"{"error":"content is required"}"#);
    }

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_unrecognized_failures_fall_through() {
        let err = ApiError::Database(DatabaseError::Migration("boom".to_string()));
        assert_eq!(err.kind(), ErrorKind::Other);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Internal Server Error");
    }

    #[test]
    fn test_unique_violation_becomes_validation() {
        let err: ApiError = DatabaseError::UniqueViolation {
            field: "username".to_string(),
            value: "rootsssss".to_string(),
        }
        .into();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("expected `username` to be unique"));
    }
}
