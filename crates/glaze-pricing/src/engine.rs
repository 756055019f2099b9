//! Quote engine facade.

use std::sync::Arc;

use crate::breakdown::CostBreakdown;
use crate::calc::WindowCalculator;
use crate::catalog::ProfileColour;
use crate::config::glass::GlassSelection;
use crate::config::prices::PriceTable;
use crate::config::store::PricingStore;
use crate::error::PricingError;
use crate::money::Money;
use crate::window::{self, WindowSpec, WindowType};

/// Prices windows against the live pricing configuration.
///
/// Calculations never mutate the configuration: each one derives its own
/// snapshot with the requested colour and glass applied.
#[derive(Clone)]
pub struct QuoteEngine {
    pricing: Arc<PricingStore>,
}

impl QuoteEngine {
    pub fn new(pricing: Arc<PricingStore>) -> Self {
        Self { pricing }
    }

    /// The pricing store backing this engine.
    pub fn pricing(&self) -> &Arc<PricingStore> {
        &self.pricing
    }

    /// Resolve the window type a spec selects.
    pub fn resolve(&self, spec: &WindowSpec) -> Result<WindowType, PricingError> {
        window::resolve(&spec.selection)
    }

    /// Compute the cost breakdown of one unit.
    pub fn calculate(&self, spec: &WindowSpec) -> Result<CostBreakdown, PricingError> {
        tracing::debug!(
            height = spec.measurements.height,
            width = spec.measurements.width,
            glass_type = %spec.glass_type,
            thickness = %spec.glass_thickness,
            colour = %spec.profile_colour,
            "calculation requested"
        );

        let result = self.try_calculate(spec);
        if let Err(e) = &result {
            tracing::warn!(error = %e, "calculation failed");
        }
        result
    }

    fn try_calculate(&self, spec: &WindowSpec) -> Result<CostBreakdown, PricingError> {
        spec.measurements.validate()?;
        let window_type = self.resolve(spec)?;
        let glass = spec.glass()?;

        let table = self.pricing.snapshot_for(spec.profile_colour, glass);
        window::calculator(window_type).compute(spec.measurements, &table)
    }

    /// Apply a profile colour's price bucket.
    pub async fn update_profile_config(
        &self,
        colour: &str,
    ) -> Result<Arc<PriceTable>, PricingError> {
        let colour: ProfileColour = colour.parse()?;
        Ok(self.pricing.update_profile(colour).await)
    }

    /// Apply a glass type and thickness, returning the new price per m².
    pub async fn update_glass_config(
        &self,
        glass_type: &str,
        thickness: &str,
    ) -> Result<Money, PricingError> {
        let glass = GlassSelection::parse(glass_type, thickness)?;
        let price = self.pricing.update_glass(glass).await;
        Money::from_decimal(price).ok_or(PricingError::Overflow)
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new(Arc::new(PricingStore::new()))
    }
}
