use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Build a CORS layer for the given origins.
///
/// Allows the methods the items API serves plus `OPTIONS`, and the
/// `Content-Type`/`Accept` headers.
pub fn create_cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Read `CORS_ALLOWED_ORIGIN` (comma-separated).
///
/// Returns `Ok(None)` when the variable is unset, so the service runs without
/// CORS behind API Gateway (which handles CORS itself).
///
/// # Errors
/// Returns an error when the variable is set but contains an invalid header value
/// or no origins at all.
pub fn cors_layer_from_env() -> io::Result<Option<CorsLayer>> {
    let Ok(origins_str) = std::env::var("CORS_ALLOWED_ORIGIN") else {
        return Ok(None);
    };

    let origins = parse_origins(&origins_str)?;
    info!("CORS configured with allowed origins: {}", origins_str);
    Ok(Some(create_cors_layer(origins)))
}

fn parse_origins(origins_str: &str) -> io::Result<Vec<HeaderValue>> {
    let origins: Vec<HeaderValue> = origins_str
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    Ok(origins)
}
