//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::{info, instrument};

use crate::codec::{self, PutBody};
use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemResponse};
use crate::repository::ItemRepository;
use crate::validation;

/// Item service providing the four item operations
///
/// The service validates put bodies, encodes and decodes items, and maps
/// absent items to [`ItemError::NotFound`]. The repository is shared, so the
/// service is cheap to clone into handler state.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create or fully replace an item from a decoded request body
    ///
    /// Returns the id that was written.
    #[instrument(skip(self, body))]
    pub async fn put_item(&self, body: &PutBody) -> ItemResult<String> {
        validation::validate_put(body.value())?;
        let item = codec::item_from_body(body)?;

        info!(item_id = %item.id, "Putting a new or updated item with id: {}", item.id);
        let id = item.id.clone();
        self.repository.put(item).await?;
        Ok(id)
    }

    /// Get an item by id
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: &str) -> ItemResult<ItemResponse> {
        info!(item_id = %id, "Fetching item with id: {}", id);
        let item = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| ItemError::NotFound(id.to_string()))?;

        codec::item_to_response(&item)
    }

    /// Every stored item
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<ItemResponse>> {
        info!("Fetching all items");
        let items: Vec<Item> = self.repository.scan().await?;
        items.iter().map(codec::item_to_response).collect()
    }

    /// Delete an item; absent ids succeed the same way
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: &str) -> ItemResult<()> {
        info!(item_id = %id, "Deleting item with id: {}", id);
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
