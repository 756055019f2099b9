//! Cart mutations over a durable store.
//!
//! Mutations of one cart are serialized; different carts proceed
//! independently. Every store call is bounded by a timeout. A mutation reads
//! the cart once, builds the resulting view in memory and then issues a
//! single write, so nothing can fail once the write has landed.

use chrono::Utc;
use dashmap::DashMap;
use glaze_pricing::window::WindowSpec;
use glaze_pricing::QuoteEngine;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::aggregator::{self, compute_totals};
use crate::error::CartError;
use crate::ids::{CartId, LineItemId};
use crate::line_item::{validate_quantity, CartLineItem};
use crate::store::{CartFilter, CartStore, ItemFilter, ItemPatch, StoreError};
use crate::timeout::TimeoutConfig;
use crate::totals::CartTotals;

/// A cart as shown to the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub cart_id: CartId,
    /// Active items, newest first.
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

impl CartView {
    fn empty(cart_id: &CartId) -> Self {
        Self {
            cart_id: cart_id.clone(),
            items: Vec::new(),
            totals: CartTotals::zero(),
        }
    }

    fn from_items(cart_id: &CartId, mut items: Vec<CartLineItem>) -> Result<Self, CartError> {
        items.retain(|i| i.active);
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let totals = compute_totals(&items)?;

        Ok(Self {
            cart_id: cart_id.clone(),
            items,
            totals,
        })
    }
}

type CartLocks = DashMap<CartId, Arc<Mutex<()>>>;

/// Exclusive access to one cart.
///
/// Dropping the guard releases the cart and forgets its lock once nobody
/// else is waiting on it.
struct CartGuard<'a> {
    locks: &'a CartLocks,
    cart_id: CartId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for CartGuard<'_> {
    fn drop(&mut self) {
        self.guard.take();
        self.locks
            .remove_if(&self.cart_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

/// Cart operations.
pub struct CartService {
    store: Arc<dyn CartStore>,
    engine: QuoteEngine,
    locks: CartLocks,
    timeouts: TimeoutConfig,
}

impl CartService {
    pub fn new(store: Arc<dyn CartStore>, engine: QuoteEngine) -> Self {
        Self {
            store,
            engine,
            locks: DashMap::new(),
            timeouts: TimeoutConfig::default(),
        }
    }

    /// Set the timeout configuration.
    pub fn with_timeouts(mut self, timeouts: TimeoutConfig) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn engine(&self) -> &QuoteEngine {
        &self.engine
    }

    /// Active items and totals of a cart.
    pub async fn get_cart(&self, cart_id: &CartId) -> Result<CartView, CartError> {
        let items = self.active_items(cart_id).await?;
        CartView::from_items(cart_id, items)
    }

    /// Price a window and add it, merging with an identical active item.
    pub async fn add(&self, cart_id: &CartId, spec: &WindowSpec) -> Result<CartView, CartError> {
        validate_quantity(i64::from(spec.quantity))?;
        let breakdown = self.engine.calculate(spec)?.materialize()?;
        let now = Utc::now();
        let new_item = CartLineItem::new(cart_id.clone(), spec, breakdown, now);
        let new_id = new_item.id.clone();

        let _guard = self.lock(cart_id).await?;

        let mut items = self.active_items(cart_id).await?;
        let holder_id = aggregator::add_or_merge(&mut items, new_item)?;
        let holder = items
            .iter()
            .find(|i| i.id == holder_id)
            .cloned()
            .ok_or_else(|| CartError::ItemNotFound(holder_id.clone()))?;
        let view = CartView::from_items(cart_id, items)?;

        if holder.id == new_id {
            let window_type = holder.window_type;
            let unit_price = holder.unit_price;
            self.call("create", self.store.create(holder)).await?;
            tracing::info!(
                cart_id = %cart_id,
                item_id = %holder_id,
                window_type = %window_type,
                unit_price = %unit_price,
                "cart item added"
            );
        } else {
            let filter = ItemFilter::new(cart_id, &holder.id);
            let patch = ItemPatch::quantity(holder.quantity, now);
            if !self.call("update_one", self.store.update_one(&filter, &patch)).await? {
                return Err(CartError::ItemNotFound(holder.id));
            }
            tracing::info!(
                cart_id = %cart_id,
                item_id = %holder.id,
                quantity = holder.quantity,
                "cart item merged"
            );
        }

        Ok(view)
    }

    /// Logically delete an item.
    pub async fn remove(
        &self,
        cart_id: &CartId,
        item_id: &LineItemId,
    ) -> Result<CartView, CartError> {
        let _guard = self.lock(cart_id).await?;
        self.deactivate(cart_id, item_id).await
    }

    /// Set an item's quantity. Anything below one removes the item.
    pub async fn update_quantity(
        &self,
        cart_id: &CartId,
        item_id: &LineItemId,
        quantity: i64,
    ) -> Result<CartView, CartError> {
        let _guard = self.lock(cart_id).await?;

        if quantity < 1 {
            return self.deactivate(cart_id, item_id).await;
        }
        let quantity = validate_quantity(quantity)?;

        let mut items = self.active_items(cart_id).await?;
        let now = Utc::now();
        let patch = ItemPatch::quantity(quantity, now);
        match items.iter_mut().find(|i| i.id == *item_id) {
            Some(item) => patch.apply(item),
            None => return Err(CartError::ItemNotFound(item_id.clone())),
        }
        let view = CartView::from_items(cart_id, items)?;

        let filter = ItemFilter::new(cart_id, item_id);
        if !self.call("update_one", self.store.update_one(&filter, &patch)).await? {
            return Err(CartError::ItemNotFound(item_id.clone()));
        }
        tracing::info!(
            cart_id = %cart_id,
            item_id = %item_id,
            quantity,
            "cart item quantity updated"
        );

        Ok(view)
    }

    /// Deactivate every item. Clearing an empty cart succeeds.
    pub async fn clear(&self, cart_id: &CartId) -> Result<CartView, CartError> {
        let _guard = self.lock(cart_id).await?;
        let patch = ItemPatch::deactivate(Utc::now());
        let cleared = self
            .call(
                "update_many",
                self.store.update_many(&CartFilter::new(cart_id), &patch),
            )
            .await?;
        tracing::info!(cart_id = %cart_id, cleared, "cart cleared");
        Ok(CartView::empty(cart_id))
    }

    /// Copy a session cart's active items into a new persistent cart.
    pub async fn save_session_cart(&self, session_cart_id: &CartId) -> Result<CartId, CartError> {
        let _guard = self.lock(session_cart_id).await?;

        let items = self.active_items(session_cart_id).await?;
        if items.is_empty() {
            return Err(CartError::EmptyCart(session_cart_id.clone()));
        }

        let persistent_id = CartId::persistent();
        let now = Utc::now();
        let copies: Vec<_> = items
            .iter()
            .map(|item| item.copy_to(&persistent_id, now))
            .collect();
        let count = copies.len();

        self.call("create_many", self.store.create_many(copies)).await?;
        tracing::info!(
            session_cart_id = %session_cart_id,
            cart_id = %persistent_id,
            items = count,
            "session cart saved"
        );
        Ok(persistent_id)
    }

    async fn active_items(&self, cart_id: &CartId) -> Result<Vec<CartLineItem>, CartError> {
        self.call("find_active", self.store.find_active(&CartFilter::new(cart_id))).await
    }

    async fn deactivate(
        &self,
        cart_id: &CartId,
        item_id: &LineItemId,
    ) -> Result<CartView, CartError> {
        let mut items = self.active_items(cart_id).await?;
        let before = items.len();
        items.retain(|i| i.id != *item_id);
        if items.len() == before {
            return Err(CartError::ItemNotFound(item_id.clone()));
        }
        let view = CartView::from_items(cart_id, items)?;

        let filter = ItemFilter::new(cart_id, item_id);
        let patch = ItemPatch::deactivate(Utc::now());
        if !self.call("update_one", self.store.update_one(&filter, &patch)).await? {
            return Err(CartError::ItemNotFound(item_id.clone()));
        }
        tracing::info!(cart_id = %cart_id, item_id = %item_id, "cart item removed");

        Ok(view)
    }

    async fn lock(&self, cart_id: &CartId) -> Result<CartGuard<'_>, CartError> {
        let lock = self.locks.entry(cart_id.clone()).or_default().clone();
        let mut guard = CartGuard {
            locks: &self.locks,
            cart_id: cart_id.clone(),
            guard: None,
        };

        match tokio::time::timeout(self.timeouts.lock, lock.lock_owned()).await {
            Ok(owned) => {
                guard.guard = Some(owned);
                Ok(guard)
            }
            Err(_) => {
                tracing::warn!(
                    cart_id = %cart_id,
                    timeout = ?self.timeouts.lock,
                    "cart lock wait timed out"
                );
                Err(CartError::StoreUnavailable(format!("cart {} is busy", cart_id)))
            }
        }
    }

    async fn call<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, CartError> {
        match tokio::time::timeout(self.timeouts.store, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::warn!(operation, error = %e, "cart store call failed");
                Err(e.into())
            }
            Err(_) => {
                tracing::warn!(
                    operation,
                    timeout = ?self.timeouts.store,
                    "cart store call timed out"
                );
                Err(CartError::StoreUnavailable(format!(
                    "{} timed out after {:?}",
                    operation, self.timeouts.store
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryCartStore;

    #[tokio::test]
    async fn test_lock_table_is_cleaned_up() {
        let service = CartService::new(Arc::new(MemoryCartStore::new()), QuoteEngine::default());
        let cart = CartId::new("cart-1");
        service.clear(&cart).await.unwrap();
        assert!(service.locks.is_empty());
    }

    #[tokio::test]
    async fn test_busy_cart_times_out() {
        let service = CartService::new(Arc::new(MemoryCartStore::new()), QuoteEngine::default())
            .with_timeouts(TimeoutConfig::new(
                std::time::Duration::from_millis(50),
                std::time::Duration::from_millis(20),
            ));
        let cart = CartId::new("cart-1");

        let held = service.lock(&cart).await.unwrap();
        let err = service.clear(&cart).await.unwrap_err();
        assert!(err.is_retryable());
        drop(held);

        service.clear(&cart).await.unwrap();
        assert!(service.locks.is_empty());
    }
}
