//! JSON file store for carts and pricing configuration.
//!
//! [`FileStore`] keeps cart line items and the active price table as JSON
//! documents in a data directory. It implements both
//! [`glaze_cart::CartStore`] and [`glaze_pricing::config::PriceTableSink`].

pub mod error;
pub mod file;

pub use error::FileStoreError;
pub use file::{FileStore, CART_ITEMS_FILE, PRICING_FILE};
