//! Type-safe error codes attached to logged errors.
//!
//! Response bodies only carry `{"message": ...}`; the codes exist so that log
//! queries can group failures without parsing messages.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};

/// Standardized error codes for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Request errors (1000-1999)
    /// Request is missing required input
    ValidationError,

    /// Request body could not be interpreted
    MalformedRequest,

    /// Requested resource was not found
    NotFound,

    // Storage errors (2000-2999)
    /// The storage backend rejected or failed a request
    StorageError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::MalformedRequest => "MALFORMED_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::StorageError => "STORAGE_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    ///
    /// - 1000-1999: request errors
    /// - 2000-2999: storage errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::MalformedRequest => 1003,
            Self::NotFound => 1004,
            Self::StorageError => 2003,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
