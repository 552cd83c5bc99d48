//! API routes module
//!
//! This module defines the HTTP routes of the items API.

pub mod health;
pub mod items;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
///
/// Item routes carry their full paths (`/items`, `/items/{item_id}`) and are
/// merged at the root.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(items::router(state))
        .merge(health::router(state.clone()))
}
