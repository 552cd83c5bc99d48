//! DynamoDB implementation of ItemRepository

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, error::DisplayErrorContext};
use tracing::{instrument, warn};

use crate::codec::{self, ID};
use crate::error::{StorageError, StorageResult};
use crate::models::Item;
use crate::repository::ItemRepository;

/// DynamoDB implementation of the ItemRepository
///
/// The table's partition key is the string attribute `id`. No sort key.
#[derive(Clone)]
pub struct DynamoItemRepository {
    client: Client,
    table_name: String,
}

impl DynamoItemRepository {
    /// Create a new DynamoItemRepository
    ///
    /// # Example
    /// ```ignore
    /// let client = database::dynamodb::connect(&DynamoConfig::default()).await;
    /// let repo = DynamoItemRepository::new(client, "http-crud-tutorial-items");
    /// ```
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Underlying client, shared with readiness checks
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl ItemRepository for DynamoItemRepository {
    #[instrument(skip(self), fields(table = %self.table_name))]
    async fn get(&self, id: &str) -> StorageResult<Option<Item>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ID, codec::key(id))
            .send()
            .await
            .map_err(|e| StorageError::backend("GetItem", DisplayErrorContext(&e).to_string()))?;

        output.item().map(codec::item_from_attributes).transpose()
    }

    #[instrument(skip(self, item), fields(table = %self.table_name, item_id = %item.id))]
    async fn put(&self, item: Item) -> StorageResult<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(codec::item_to_attributes(&item)))
            .send()
            .await
            .map_err(|e| StorageError::backend("PutItem", DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(table = %self.table_name))]
    async fn delete(&self, id: &str) -> StorageResult<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ID, codec::key(id))
            .send()
            .await
            .map_err(|e| {
                StorageError::backend("DeleteItem", DisplayErrorContext(&e).to_string())
            })?;

        Ok(())
    }

    /// Single `Scan` call; a table past one page (1 MB) is not followed.
    #[instrument(skip(self), fields(table = %self.table_name))]
    async fn scan(&self) -> StorageResult<Vec<Item>> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| StorageError::backend("Scan", DisplayErrorContext(&e).to_string()))?;

        if output.last_evaluated_key().is_some() {
            warn!(
                table = %self.table_name,
                "Scan result was truncated; only the first page is returned"
            );
        }

        output
            .items()
            .iter()
            .map(codec::item_from_attributes)
            .collect()
    }
}
