pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every error leaves the service as a single human-readable message:
///
/// ```json
/// { "message": "Item 42 not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Client-facing variants (`BadRequest`, `NotFound`) return their message
/// verbatim. Server-side variants log their detail and answer with the generic
/// [`messages::INTERNAL_ERROR`] body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MalformedRequest(_) | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest(msg) => {
                tracing::warn!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Bad request: {}",
                    msg
                );
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                msg
            }
            AppError::MalformedRequest(detail) => {
                tracing::error!(
                    error_code = ErrorCode::MalformedRequest.code(),
                    "Malformed request: {}",
                    detail
                );
                messages::INTERNAL_ERROR.to_string()
            }
            AppError::Storage(detail) => {
                tracing::error!(
                    error_code = ErrorCode::StorageError.code(),
                    "Storage error: {}",
                    detail
                );
                messages::INTERNAL_ERROR.to_string()
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

/// Helper function to create error responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::error_response;
/// use axum::http::StatusCode;
///
/// let response = error_response(StatusCode::BAD_REQUEST, "Invalid input");
/// ```
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bad_request_keeps_message() {
        let response = AppError::BadRequest("Missing required fields".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        assert_eq!(
            body_of(response).await,
            ErrorResponse::new("Missing required fields")
        );
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let response = AppError::NotFound("Item 7 not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await.message, "Item 7 not found");
    }

    #[tokio::test]
    async fn test_storage_error_hides_detail() {
        let response =
            AppError::Storage("ProvisionedThroughputExceededException: slow down".into())
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body.message, messages::INTERNAL_ERROR);
        assert!(!body.message.contains("Throughput"));
    }

    #[tokio::test]
    async fn test_malformed_request_is_generic_server_error() {
        let response = AppError::MalformedRequest("price is not a number".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.message, messages::INTERNAL_ERROR);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::BadRequest("missing".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Item 1 not found".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Storage("throttled".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
