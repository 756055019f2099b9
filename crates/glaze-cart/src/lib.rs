//! Cart aggregation and cart service for aluminium window quotes.
//!
//! - **Line items**: quoted windows with their price frozen at add-time
//! - **Aggregator**: pure totals, merge detection and clearing
//! - **Service**: per-cart serialized mutations over a [`CartStore`]
//!
//! # Example
//!
//! ```rust,ignore
//! use glaze_cart::prelude::*;
//! use glaze_pricing::prelude::*;
//! use std::sync::Arc;
//!
//! let service = CartService::new(Arc::new(MemoryCartStore::new()), QuoteEngine::default());
//! let cart = CartId::generate();
//! let view = service.add(&cart, &spec).await?;
//! println!("Total: {}", view.totals.grand_total);
//! ```

pub mod aggregator;
pub mod error;
pub mod ids;
pub mod line_item;
pub mod memory;
pub mod service;
pub mod store;
pub mod timeout;
pub mod totals;

pub use error::CartError;
pub use ids::{CartId, LineItemId};
pub use store::{CartStore, StoreError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::aggregator::{add_or_merge, clear, compute_totals, find_mergeable};
    pub use crate::error::CartError;
    pub use crate::ids::{CartId, LineItemId};
    pub use crate::line_item::{CartLineItem, ConfigurationKey, MAX_QUANTITY_PER_ITEM};
    pub use crate::memory::MemoryCartStore;
    pub use crate::service::{CartService, CartView};
    pub use crate::store::{CartFilter, CartStore, ItemFilter, ItemPatch, StoreError};
    pub use crate::timeout::TimeoutConfig;
    pub use crate::totals::CartTotals;
}
