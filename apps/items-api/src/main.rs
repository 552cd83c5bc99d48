use axum::Router;
use axum_helpers::server::{create_production_app, create_router, health_router, run_lambda};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::{AppState, Storage};

/// Compose the full application router.
///
/// - `/items`, `/items/{item_id}`: item CRUD
/// - `/health`: liveness with app name/version
/// - `/ready`: readiness with a real storage check
/// - `/swagger-ui`, `/api-docs/openapi.json`: API docs
fn build_app(state: &AppState) -> std::io::Result<Router> {
    let api_routes = api::routes(state);
    let router = create_router::<openapi::ApiDoc>(api_routes)?;
    Ok(router.merge(health_router(state.config.app)))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!(
        table = %config.dynamodb.table_name(),
        storage = ?config.storage,
        runtime = ?config.server.runtime,
        "Starting {} v{}",
        config.app.name,
        config.app.version
    );

    // Build the storage client once; every request reuses it
    let storage = Storage::from_config(&config).await;

    // A missing table is reported but not fatal: /ready keeps reporting it
    if let Storage::DynamoDb(repository) = &storage {
        if !database::dynamodb::check_health(repository.client(), repository.table_name()).await {
            warn!(
                table = %repository.table_name(),
                "DynamoDB table is not reachable yet; requests will fail until it is"
            );
        }
    }

    let state = AppState { config, storage };
    let app = build_app(&state)?;

    if state.config.server.is_lambda() {
        run_lambda(app)
            .await
            .map_err(|e| eyre::eyre!("Lambda runtime error: {}", e))?;
        return Ok(());
    }

    info!("Starting items API with production-ready shutdown (30s timeout)");

    // Production-ready server with graceful shutdown
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: releasing item storage");
            // The DynamoDB client closes its connection pool on drop
            drop(state.storage);
            info!("Item storage released");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
