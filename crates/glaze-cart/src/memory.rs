//! In-memory cart store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::line_item::CartLineItem;
use crate::store::{CartFilter, CartStore, ItemFilter, ItemPatch, StoreError};

/// A cart store holding every item in memory.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    items: RwLock<Vec<CartLineItem>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored item, including inactive ones.
    pub async fn all(&self) -> Vec<CartLineItem> {
        self.items.read().await.clone()
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn find_active(&self, filter: &CartFilter) -> Result<Vec<CartLineItem>, StoreError> {
        let items = self.items.read().await;
        Ok(items.iter().filter(|i| filter.matches(i)).cloned().collect())
    }

    async fn create(&self, item: CartLineItem) -> Result<(), StoreError> {
        self.items.write().await.push(item);
        Ok(())
    }

    async fn create_many(&self, items: Vec<CartLineItem>) -> Result<(), StoreError> {
        self.items.write().await.extend(items);
        Ok(())
    }

    async fn update_one(&self, filter: &ItemFilter, patch: &ItemPatch) -> Result<bool, StoreError> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|i| filter.matches(i)) {
            Some(item) => {
                patch.apply(item);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_many(&self, filter: &CartFilter, patch: &ItemPatch) -> Result<u64, StoreError> {
        let mut items = self.items.write().await;
        let mut patched = 0;
        for item in items.iter_mut().filter(|i| filter.matches(i)) {
            patch.apply(item);
            patched += 1;
        }
        Ok(patched)
    }
}
