use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::StorageResult;
use crate::models::Item;

/// Repository trait for Item persistence
///
/// Items are keyed by `id`. Writes replace the whole item and deletes of
/// absent ids succeed, so every operation is idempotent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Fetch an item by id
    async fn get(&self, id: &str) -> StorageResult<Option<Item>>;

    /// Insert or fully replace an item
    async fn put(&self, item: Item) -> StorageResult<()>;

    /// Remove an item; succeeds whether or not it existed
    async fn delete(&self, id: &str) -> StorageResult<()>;

    /// Every stored item, in no particular order
    async fn scan(&self) -> StorageResult<Vec<Item>>;
}

/// In-memory implementation for local runs and tests
#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<HashMap<String, Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn get(&self, id: &str) -> StorageResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(id).cloned())
    }

    async fn put(&self, item: Item) -> StorageResult<()> {
        let mut items = self.items.write().await;
        items.insert(item.id.clone(), item);
        Ok(())
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        let mut items = self.items.write().await;
        items.remove(id);
        Ok(())
    }

    async fn scan(&self) -> StorageResult<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;

    fn item(id: &str, name: &str, price: &str) -> Item {
        Item::new(id, name, Price::parse(price).unwrap())
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let repo = InMemoryItemRepository::new();
        repo.put(item("1", "widget", "9.99")).await.unwrap();

        let fetched = repo.get("1").await.unwrap();
        assert_eq!(fetched, Some(item("1", "widget", "9.99")));
        assert_eq!(repo.get("2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_replaces_whole_item() {
        let repo = InMemoryItemRepository::new();
        repo.put(item("1", "widget", "9.99")).await.unwrap();
        repo.put(item("1", "gizmo", "5")).await.unwrap();

        assert_eq!(repo.get("1").await.unwrap(), Some(item("1", "gizmo", "5")));
        assert_eq!(repo.scan().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryItemRepository::new();
        repo.put(item("1", "widget", "9.99")).await.unwrap();

        repo.delete("1").await.unwrap();
        repo.delete("1").await.unwrap();
        repo.delete("never-existed").await.unwrap();
        assert_eq!(repo.get("1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_scan_returns_every_item() {
        let repo = InMemoryItemRepository::new();
        assert!(repo.scan().await.unwrap().is_empty());

        for i in 0..5 {
            repo.put(item(&i.to_string(), "thing", "1")).await.unwrap();
        }

        let mut ids: Vec<_> = repo.scan().await.unwrap().into_iter().map(|i| i.id).collect();
        ids.sort();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryItemRepository::new();
        let other = repo.clone();
        repo.put(item("1", "widget", "9.99")).await.unwrap();
        assert!(other.get("1").await.unwrap().is_some());
    }
}
