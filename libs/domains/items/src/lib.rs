//! Items Domain
//!
//! A single `item` resource (`id`, `name`, `price`) stored in a DynamoDB table
//! keyed by `id`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, error → status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found, encode/decode
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← get/put/delete/scan (trait + DynamoDB and in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Codec     │  ← JSON body ↔ Item ↔ attribute map, exact decimal prices
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::dynamodb::{DynamoConfig, connect};
//! use domain_items::{DynamoItemRepository, ItemService, handlers};
//!
//! # async fn example() {
//! let config = DynamoConfig::default();
//! let client = connect(&config).await;
//!
//! let repository = DynamoItemRepository::new(client, config.table_name());
//! let service = ItemService::new(repository);
//!
//! let router = handlers::router(service);
//! # }
//! ```

pub mod codec;
pub mod dynamodb;
pub mod error;
pub mod handlers;
pub mod models;
pub mod price;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use codec::PutBody;
pub use dynamodb::DynamoItemRepository;
pub use error::{ItemError, ItemResult, StorageError, StorageResult};
pub use handlers::ApiDoc;
pub use models::{Item, ItemResponse, MessageResponse, PutItemRequest};
pub use price::{Price, PriceError};
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
