//! Pricing engine for aluminium window quotes.
//!
//! This crate turns a shopper's window choice into an itemized cost:
//!
//! - **Catalog**: glass types, thicknesses and profile colours
//! - **Config**: the versioned unit price table and its live store
//! - **Window**: measurements, type keys and layout resolution
//! - **Calc**: per-topology component takeoffs for all nineteen types
//! - **Breakdown**: priced lines, subtotal, installation and total
//!
//! # Example
//!
//! ```rust
//! use glaze_pricing::prelude::*;
//!
//! let engine = QuoteEngine::default();
//! let spec = WindowSpec::with_layout(
//!     3,
//!     "noPartition",
//!     Measurements::new(1200, 1500),
//!     GlassType::Clear,
//!     GlassThickness::Mm6,
//!     ProfileColour::White,
//! );
//!
//! let breakdown = engine.calculate(&spec).unwrap();
//! assert_eq!(breakdown.window_type(), WindowType::Type4);
//! println!("Total: {}", breakdown.total_cost().unwrap());
//! ```

pub mod breakdown;
pub mod calc;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod money;
pub mod window;

pub use engine::QuoteEngine;
pub use error::{PersistError, PricingError};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::engine::QuoteEngine;
    pub use crate::error::{PersistError, PricingError};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{ColourBucket, GlassThickness, GlassType, ProfileColour};

    // Config
    pub use crate::config::{GlassSelection, PriceTable, PriceTableSink, PricingStore, UnitPrices};

    // Window
    pub use crate::window::{
        Measurements, PartitionStyle, WindowSelection, WindowSpec, WindowType,
    };

    // Breakdown
    pub use crate::breakdown::{
        Component, ComponentGroup, ComponentLine, CostBreakdown, MaterializedBreakdown,
    };
    pub use crate::calc::WindowCalculator;
}
