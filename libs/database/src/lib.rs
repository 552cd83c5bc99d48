//! Database library providing connectors and utilities for the storage backends
//! used by the services in this workspace.
//!
//! # Features
//!
//! - `dynamodb` (default) - Amazon DynamoDB support via the AWS SDK
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Examples
//!
//! ## DynamoDB
//!
//! ```ignore
//! use database::dynamodb::{self, DynamoConfig};
//!
//! let config = DynamoConfig::new("http-crud-tutorial-items")
//!     .with_endpoint_url("http://localhost:8000");
//! let client = dynamodb::connect(&config).await;
//! dynamodb::check_table(&client, config.table_name()).await?;
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};
