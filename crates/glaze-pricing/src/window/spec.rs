//! Shopper-supplied window specification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::WindowType;
use super::{MAX_DIMENSION_MM, MIN_DIMENSION_MM};
use crate::catalog::{GlassThickness, GlassType, ProfileColour};
use crate::config::glass::GlassSelection;
use crate::error::PricingError;

/// Opening size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Measurements {
    pub height: u32,
    pub width: u32,
}

impl Measurements {
    pub fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    /// Reject sizes outside the manufacturable range.
    pub fn validate(&self) -> Result<(), PricingError> {
        let range = MIN_DIMENSION_MM..=MAX_DIMENSION_MM;
        if range.contains(&self.height) && range.contains(&self.width) {
            Ok(())
        } else {
            Err(PricingError::InvalidMeasurement {
                height_mm: self.height,
                width_mm: self.width,
            })
        }
    }

    /// Height in metres.
    pub fn height_m(&self) -> Decimal {
        Decimal::new(i64::from(self.height), 3)
    }

    /// Width in metres.
    pub fn width_m(&self) -> Decimal {
        Decimal::new(i64::from(self.width), 3)
    }
}

/// How the shopper chose the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WindowSelection {
    /// An explicit type key.
    Type {
        #[serde(rename = "type")]
        window_type: WindowType,
    },
    /// A panel count and partition style, resolved through the layout table.
    Layout {
        #[serde(rename = "noOfPanels")]
        panel_count: u8,
        #[serde(rename = "fixedPartition")]
        partition_style: String,
    },
}

fn default_quantity() -> u32 {
    1
}

/// Everything needed to quote one window line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSpec {
    #[serde(flatten)]
    pub selection: WindowSelection,
    #[serde(flatten)]
    pub measurements: Measurements,
    pub glass_type: GlassType,
    pub glass_thickness: GlassThickness,
    pub profile_colour: ProfileColour,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl WindowSpec {
    /// Create a spec for one window of an explicit type.
    pub fn new(
        window_type: WindowType,
        measurements: Measurements,
        glass_type: GlassType,
        glass_thickness: GlassThickness,
        profile_colour: ProfileColour,
    ) -> Self {
        Self {
            selection: WindowSelection::Type { window_type },
            measurements,
            glass_type,
            glass_thickness,
            profile_colour,
            quantity: 1,
        }
    }

    /// Create a spec for one window chosen by layout.
    pub fn with_layout(
        panel_count: u8,
        partition_style: impl Into<String>,
        measurements: Measurements,
        glass_type: GlassType,
        glass_thickness: GlassThickness,
        profile_colour: ProfileColour,
    ) -> Self {
        Self {
            selection: WindowSelection::Layout {
                panel_count,
                partition_style: partition_style.into(),
            },
            measurements,
            glass_type,
            glass_thickness,
            profile_colour,
            quantity: 1,
        }
    }

    /// Set the quantity.
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// The validated glass pair.
    pub fn glass(&self) -> Result<GlassSelection, PricingError> {
        GlassSelection::new(self.glass_type, self.glass_thickness)
    }
}
