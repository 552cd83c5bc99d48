use axum::{http::StatusCode, response::Response};

use super::{error_response, messages};

/// Handler for requests that match no route.
///
/// Used as the router fallback; mirrors the body API Gateway returns for an
/// unknown route.
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, messages::NOT_FOUND_ROUTE)
}
