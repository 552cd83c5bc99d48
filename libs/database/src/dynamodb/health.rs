use aws_sdk_dynamodb::Client;
use std::time::Instant;

use crate::common::{DatabaseError, DatabaseResult};

/// Health check status for a DynamoDB table
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the table is reachable
    pub healthy: bool,
    /// Optional message (e.g., error details)
    pub message: Option<String>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

/// Verify the table exists and the client can reach it (`DescribeTable`).
pub async fn check_table(client: &Client, table_name: &str) -> DatabaseResult<()> {
    client
        .describe_table()
        .table_name(table_name)
        .send()
        .await
        .map(|_| ())
        .map_err(|e| {
            DatabaseError::HealthCheckFailed(format!(
                "describe_table on '{}' failed: {}",
                table_name,
                aws_sdk_dynamodb::error::DisplayErrorContext(&e)
            ))
        })
}

/// Check DynamoDB health, returning only a boolean
pub async fn check_health(client: &Client, table_name: &str) -> bool {
    check_table(client, table_name).await.is_ok()
}

/// Check DynamoDB health with timing information
pub async fn check_health_detailed(client: &Client, table_name: &str) -> HealthStatus {
    let start = Instant::now();
    let result = check_table(client, table_name).await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => {
            tracing::warn!(table = %table_name, error = %e, "DynamoDB health check failed");
            HealthStatus {
                healthy: false,
                message: Some(e.to_string()),
                response_time_ms,
            }
        }
    }
}
