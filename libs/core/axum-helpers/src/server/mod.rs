//! Server infrastructure module.
//!
//! This module provides:
//! - Application setup with OpenAPI documentation and common middleware
//! - Health endpoints
//! - Graceful shutdown coordination for the TCP server
//! - An AWS Lambda runner for the same router
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//! use std::time::Duration;
//!
//! let router = create_router::<ApiDoc>(api_routes)?;
//! let app = router.merge(health_router(app_info!()));
//! create_production_app(app, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod lambda;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use lambda::run_lambda;
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
