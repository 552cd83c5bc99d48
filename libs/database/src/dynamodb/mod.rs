//! DynamoDB connector and utilities
//!
//! Provides client construction from configuration and a table-level health check.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_TABLE_NAME, DynamoConfig};
pub use connector::connect;
pub use health::{HealthStatus, check_health, check_health_detailed, check_table};

// Re-export SDK types for convenience
pub use aws_sdk_dynamodb::Client;
