use axum::Router;
use tracing::info;

/// Serve `router` through the AWS Lambda runtime API.
///
/// API Gateway (HTTP API or REST) events are converted to HTTP requests, so
/// the routing table, error mapping and middleware are exactly the ones the
/// TCP server uses. Returns when the runtime loop stops.
pub async fn run_lambda(router: Router) -> Result<(), lambda_http::Error> {
    info!("Starting Lambda runtime loop");
    lambda_http::run(router).await
}
