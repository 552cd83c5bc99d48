use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Backend fault raised by a repository.
///
/// Carries the backend's own description for logs; it is never shown to clients.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{operation} failed: {message}")]
    Backend {
        operation: &'static str,
        message: String,
    },

    #[error("Stored item is invalid: {0}")]
    Decode(String),
}

impl StorageError {
    pub fn backend(operation: &'static str, message: impl Into<String>) -> Self {
        StorageError::Backend {
            operation,
            message: message.into(),
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum ItemError {
    /// Required field(s) absent from a put body
    #[error("{0}")]
    Validation(String),

    #[error("Item {0} not found")]
    NotFound(String),

    /// Put body present but not decodable (bad JSON, wrong field types)
    #[error("Malformed item: {0}")]
    Malformed(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
///
/// Validation and not-found keep their messages; malformed bodies and storage
/// faults become generic server errors at the boundary.
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::Validation(msg) => AppError::BadRequest(msg),
            err @ ItemError::NotFound(_) => AppError::NotFound(err.to_string()),
            ItemError::Malformed(detail) => AppError::MalformedRequest(detail),
            ItemError::Storage(e) => AppError::Storage(e.to_string()),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
