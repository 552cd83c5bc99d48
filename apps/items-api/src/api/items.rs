//! Items API routes
//!
//! This module wires up the items domain to HTTP routes.

use axum::Router;
use domain_items::{ItemService, handlers};

use crate::state::{AppState, Storage};

/// Create items router
pub fn router(state: &AppState) -> Router {
    match &state.storage {
        Storage::DynamoDb(repository) => handlers::router(ItemService::new(repository.clone())),
        Storage::Memory(repository) => handlers::router(ItemService::new(repository.clone())),
    }
}
