//! Application state management.
//!
//! This module defines the shared application state passed to all request handlers.
//! The state contains:
//! - Configuration
//! - The item repository selected by `ITEMS_STORAGE_BACKEND`

use domain_items::{DynamoItemRepository, InMemoryItemRepository};

use crate::config::{Config, StorageBackend};

/// Item storage chosen at start-up.
///
/// Both repositories are cheap to clone and share their underlying client or map.
#[derive(Clone)]
pub enum Storage {
    DynamoDb(DynamoItemRepository),
    Memory(InMemoryItemRepository),
}

impl Storage {
    /// Build the repository for the configured backend.
    ///
    /// The DynamoDB client is constructed once here and reused by every request.
    pub async fn from_config(config: &Config) -> Self {
        match config.storage {
            StorageBackend::DynamoDb => {
                let client = database::dynamodb::connect(&config.dynamodb).await;
                Storage::DynamoDb(DynamoItemRepository::new(
                    client,
                    config.dynamodb.table_name(),
                ))
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory item storage; data is lost on restart");
                Storage::Memory(InMemoryItemRepository::new())
            }
        }
    }
}

/// Shared application state.
///
/// This struct is cloned for each handler (inexpensive Arc clones), providing access to:
/// - Application configuration
/// - Item storage
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// Item repository (DynamoDB table or in-memory map)
    pub storage: Storage,
}
