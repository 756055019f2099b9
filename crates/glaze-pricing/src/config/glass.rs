//! Fixed glass price table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{GlassThickness, GlassType};
use crate::error::PricingError;

/// Unit price per m² for a glass type and thickness.
///
/// The table is sparse: obscured and nashiji glass only come in the four
/// float thicknesses.
pub fn glass_unit_price(glass_type: GlassType, thickness: GlassThickness) -> Option<Decimal> {
    use GlassThickness::*;

    let price: i64 = match glass_type {
        GlassType::Clear => match thickness {
            Mm4 => 130,
            Mm5 => 160,
            Mm6 => 180,
            Mm8 => 230,
            Laminated3 => 320,
            Laminated4 => 370,
            Laminated5 => 410,
            Toughened6 => 380,
            Toughened8 => 500,
            Toughened10 => 550,
        },
        GlassType::OneWay | GlassType::Tinted => match thickness {
            Mm4 => 160,
            Mm5 => 220,
            Mm6 => 250,
            Mm8 => 300,
            Laminated3 => 380,
            Laminated4 => 400,
            Laminated5 => 460,
            Toughened6 => 450,
            Toughened8 => 510,
            Toughened10 => 570,
        },
        GlassType::Obscured | GlassType::Nashiji => match thickness {
            Mm4 => 160,
            Mm5 => 220,
            Mm6 => 260,
            Mm8 => 280,
            _ => return None,
        },
    };
    Some(Decimal::from(price))
}

/// A validated glass type and thickness pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlassSelection {
    pub glass_type: GlassType,
    pub thickness: GlassThickness,
}

impl GlassSelection {
    /// Create a selection, rejecting pairs missing from the price table.
    pub fn new(glass_type: GlassType, thickness: GlassThickness) -> Result<Self, PricingError> {
        match glass_unit_price(glass_type, thickness) {
            Some(_) => Ok(Self {
                glass_type,
                thickness,
            }),
            None => Err(PricingError::InvalidGlassSpec {
                glass_type: glass_type.to_string(),
                thickness: thickness.to_string(),
            }),
        }
    }

    /// Parse wire names (e.g., "obscured", "6mm").
    pub fn parse(glass_type: &str, thickness: &str) -> Result<Self, PricingError> {
        let invalid = || PricingError::InvalidGlassSpec {
            glass_type: glass_type.to_string(),
            thickness: thickness.to_string(),
        };
        let t: GlassType = glass_type.parse().map_err(|_| invalid())?;
        let th: GlassThickness = thickness.parse().map_err(|_| invalid())?;
        Self::new(t, th)
    }

    /// Unit price per m².
    pub fn unit_price(&self) -> Decimal {
        // Constructors only admit pairs present in the table.
        glass_unit_price(self.glass_type, self.thickness).unwrap_or_default()
    }
}
