//! Readiness endpoint with a real storage check

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

use crate::state::{AppState, Storage};

/// Create the readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies the item table is reachable
///
/// The in-memory backend is always ready.
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = match &state.storage {
        Storage::DynamoDb(repository) => vec![(
            "dynamodb",
            Box::pin(async move {
                let status = database::dynamodb::check_health_detailed(
                    repository.client(),
                    repository.table_name(),
                )
                .await;
                tracing::debug!(
                    response_time_ms = status.response_time_ms,
                    "DynamoDB readiness check finished"
                );
                if status.healthy {
                    Ok(())
                } else {
                    Err(status
                        .message
                        .unwrap_or_else(|| "DynamoDB health check failed".to_string()))
                }
            }),
        )],
        Storage::Memory(_) => vec![("memory", Box::pin(async { Ok::<(), String>(()) }))],
    };

    run_health_checks(checks).await
}
