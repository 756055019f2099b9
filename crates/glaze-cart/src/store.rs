//! The durable store boundary for cart line items.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::ids::{CartId, LineItemId};
use crate::line_item::CartLineItem;

/// Errors raised by a cart store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the backing files failed.
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Selects the active items of one cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartFilter {
    pub cart_id: CartId,
}

impl CartFilter {
    pub fn new(cart_id: &CartId) -> Self {
        Self {
            cart_id: cart_id.clone(),
        }
    }

    pub fn matches(&self, item: &CartLineItem) -> bool {
        item.active && item.cart_id == self.cart_id
    }
}

/// Selects one active item of one cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFilter {
    pub cart_id: CartId,
    pub item_id: LineItemId,
}

impl ItemFilter {
    pub fn new(cart_id: &CartId, item_id: &LineItemId) -> Self {
        Self {
            cart_id: cart_id.clone(),
            item_id: item_id.clone(),
        }
    }

    pub fn matches(&self, item: &CartLineItem) -> bool {
        item.active && item.cart_id == self.cart_id && item.id == self.item_id
    }
}

/// Field updates applied to matched items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPatch {
    pub quantity: Option<u32>,
    pub active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl ItemPatch {
    /// Set a new quantity.
    pub fn quantity(quantity: u32, now: DateTime<Utc>) -> Self {
        Self {
            quantity: Some(quantity),
            active: None,
            updated_at: now,
        }
    }

    /// Logically delete.
    pub fn deactivate(now: DateTime<Utc>) -> Self {
        Self {
            quantity: None,
            active: Some(false),
            updated_at: now,
        }
    }

    pub fn apply(&self, item: &mut CartLineItem) {
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(active) = self.active {
            item.active = active;
        }
        item.updated_at = self.updated_at;
    }
}

/// Durable storage for cart line items.
///
/// Items are never physically removed; deletes clear the `active` flag.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// All active items of a cart, in insertion order.
    async fn find_active(&self, filter: &CartFilter) -> Result<Vec<CartLineItem>, StoreError>;

    /// Insert one item.
    async fn create(&self, item: CartLineItem) -> Result<(), StoreError>;

    /// Insert several items in one write.
    async fn create_many(&self, items: Vec<CartLineItem>) -> Result<(), StoreError> {
        for item in items {
            self.create(item).await?;
        }
        Ok(())
    }

    /// Patch the matching item. Returns false if nothing matched.
    async fn update_one(&self, filter: &ItemFilter, patch: &ItemPatch) -> Result<bool, StoreError>;

    /// Patch every matching item. Returns the number patched.
    async fn update_many(&self, filter: &CartFilter, patch: &ItemPatch) -> Result<u64, StoreError>;
}
