//! Cart line items.

use chrono::{DateTime, Utc};
use glaze_pricing::breakdown::MaterializedBreakdown;
use glaze_pricing::catalog::{GlassThickness, GlassType, ProfileColour};
use glaze_pricing::window::{Measurements, WindowSpec, WindowType};
use glaze_pricing::Money;
use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::ids::{CartId, LineItemId};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// The fields two line items must share to be merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigurationKey {
    pub window_type: WindowType,
    pub measurements: Measurements,
    pub glass_type: GlassType,
    pub glass_thickness: GlassThickness,
    pub profile_colour: ProfileColour,
}

/// A quoted window in a cart.
///
/// The unit price and component costs are frozen when the item is added;
/// later pricing updates do not touch them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub id: LineItemId,
    pub cart_id: CartId,
    pub window_type: WindowType,
    #[serde(flatten)]
    pub measurements: Measurements,
    pub glass_type: GlassType,
    pub glass_thickness: GlassThickness,
    pub profile_colour: ProfileColour,
    /// Total cost of one unit at add-time.
    pub unit_price: Money,
    /// Component costs of one unit at add-time.
    pub breakdown: MaterializedBreakdown,
    pub quantity: u32,
    /// Cleared instead of deleting the row.
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartLineItem {
    /// Create an active item from a priced spec.
    pub fn new(
        cart_id: CartId,
        spec: &WindowSpec,
        breakdown: MaterializedBreakdown,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: LineItemId::generate(),
            cart_id,
            window_type: breakdown.window_type,
            measurements: spec.measurements,
            glass_type: spec.glass_type,
            glass_thickness: spec.glass_thickness,
            profile_colour: spec.profile_colour,
            unit_price: breakdown.total_cost,
            breakdown,
            quantity: spec.quantity,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn configuration_key(&self) -> ConfigurationKey {
        ConfigurationKey {
            window_type: self.window_type,
            measurements: self.measurements,
            glass_type: self.glass_type,
            glass_thickness: self.glass_thickness,
            profile_colour: self.profile_colour,
        }
    }

    /// unit price × quantity.
    pub fn line_total(&self) -> Result<Money, CartError> {
        self.unit_price
            .try_multiply(i64::from(self.quantity))
            .ok_or(CartError::Overflow)
    }

    /// Copy this item into another cart under a fresh ID.
    pub fn copy_to(&self, cart_id: &CartId, now: DateTime<Utc>) -> Self {
        Self {
            id: LineItemId::generate(),
            cart_id: cart_id.clone(),
            created_at: now,
            updated_at: now,
            ..self.clone()
        }
    }
}

/// Check a requested quantity against the per-item limits.
pub fn validate_quantity(quantity: i64) -> Result<u32, CartError> {
    u32::try_from(quantity)
        .ok()
        .filter(|q| (1..=MAX_QUANTITY_PER_ITEM).contains(q))
        .ok_or(CartError::InvalidQuantity(quantity))
}
