use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::price::Price;

/// Item entity as stored in the table
///
/// `id` is the partition key and is supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub price: Price,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// Item as returned to clients, with `price` as a JSON number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    /// Item ID
    pub id: String,
    /// Item name
    pub name: String,
    /// Price; may show floating-point rounding of the stored decimal
    pub price: f64,
}

/// Body of `PUT /items`
///
/// Only the presence of the three fields is checked before encoding. `price`
/// may also be sent as a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PutItemRequest {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Confirmation body for writes and deletes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn put(id: &str) -> Self {
        Self {
            message: format!("Put item {}", id),
        }
    }

    pub fn deleted(id: &str) -> Self {
        Self {
            message: format!("Deleted item {}", id),
        }
    }
}
