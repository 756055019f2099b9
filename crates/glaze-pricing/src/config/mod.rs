//! Pricing configuration: unit prices, the glass table and the live store.

pub mod glass;
pub mod prices;
pub mod store;

pub use glass::{glass_unit_price, GlassSelection};
pub use prices::{PriceTable, UnitPrices};
pub use store::{PriceTableSink, PricingStore, DEFAULT_PERSIST_TIMEOUT};
