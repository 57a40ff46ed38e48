//! HTTP error responses
//!
//! Two tiers: expected absence surfaces as 404 with a static message,
//! store or storage failure surfaces uniformly as 500 with a generic
//! message. Error bodies are always `{"error": <string>}` and no
//! failure cause detail reaches the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Route-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Target record absent
    #[error("{0}")]
    NotFound(&'static str),

    /// Store or storage failure
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("Book not found.").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("Failed to fetch books.").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorResponse {
            error: "No books found.".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "No books found."}));
    }
}
