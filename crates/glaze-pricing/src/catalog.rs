//! Shopper-selectable glass and profile options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// Glass type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GlassType {
    Clear,
    OneWay,
    Tinted,
    Obscured,
    Nashiji,
}

impl GlassType {
    /// All glass types.
    pub const ALL: [GlassType; 5] = [
        GlassType::Clear,
        GlassType::OneWay,
        GlassType::Tinted,
        GlassType::Obscured,
        GlassType::Nashiji,
    ];

    /// Get the wire name (e.g., "oneWay").
    pub fn as_str(&self) -> &'static str {
        match self {
            GlassType::Clear => "clear",
            GlassType::OneWay => "oneWay",
            GlassType::Tinted => "tinted",
            GlassType::Obscured => "obscured",
            GlassType::Nashiji => "nashiji",
        }
    }
}

impl FromStr for GlassType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GlassType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PricingError::InvalidGlassSpec {
                glass_type: s.to_string(),
                thickness: String::new(),
            })
    }
}

impl fmt::Display for GlassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Glass thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GlassThickness {
    #[serde(rename = "4mm")]
    Mm4,
    #[serde(rename = "5mm")]
    Mm5,
    #[serde(rename = "6mm")]
    Mm6,
    #[serde(rename = "8mm")]
    Mm8,
    #[serde(rename = "3+3mmLam")]
    Laminated3,
    #[serde(rename = "4+4mmLam")]
    Laminated4,
    #[serde(rename = "5+5mmLam")]
    Laminated5,
    #[serde(rename = "6mmTuff")]
    Toughened6,
    #[serde(rename = "8mmTuff")]
    Toughened8,
    #[serde(rename = "10mmTuff")]
    Toughened10,
}

impl GlassThickness {
    /// All thicknesses.
    pub const ALL: [GlassThickness; 10] = [
        GlassThickness::Mm4,
        GlassThickness::Mm5,
        GlassThickness::Mm6,
        GlassThickness::Mm8,
        GlassThickness::Laminated3,
        GlassThickness::Laminated4,
        GlassThickness::Laminated5,
        GlassThickness::Toughened6,
        GlassThickness::Toughened8,
        GlassThickness::Toughened10,
    ];

    /// Get the wire name (e.g., "3+3mmLam").
    pub fn as_str(&self) -> &'static str {
        match self {
            GlassThickness::Mm4 => "4mm",
            GlassThickness::Mm5 => "5mm",
            GlassThickness::Mm6 => "6mm",
            GlassThickness::Mm8 => "8mm",
            GlassThickness::Laminated3 => "3+3mmLam",
            GlassThickness::Laminated4 => "4+4mmLam",
            GlassThickness::Laminated5 => "5+5mmLam",
            GlassThickness::Toughened6 => "6mmTuff",
            GlassThickness::Toughened8 => "8mmTuff",
            GlassThickness::Toughened10 => "10mmTuff",
        }
    }
}

impl FromStr for GlassThickness {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GlassThickness::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PricingError::InvalidGlassSpec {
                glass_type: String::new(),
                thickness: s.to_string(),
            })
    }
}

impl fmt::Display for GlassThickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aluminium profile colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileColour {
    White,
    Black,
    Silver,
    Brown,
    Champagne,
    Grey,
}

impl ProfileColour {
    /// All profile colours.
    pub const ALL: [ProfileColour; 6] = [
        ProfileColour::White,
        ProfileColour::Black,
        ProfileColour::Silver,
        ProfileColour::Brown,
        ProfileColour::Champagne,
        ProfileColour::Grey,
    ];

    /// Get the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileColour::White => "white",
            ProfileColour::Black => "black",
            ProfileColour::Silver => "silver",
            ProfileColour::Brown => "brown",
            ProfileColour::Champagne => "champagne",
            ProfileColour::Grey => "grey",
        }
    }

    /// The price bucket this colour belongs to.
    pub fn bucket(&self) -> ColourBucket {
        match self {
            ProfileColour::White | ProfileColour::Silver | ProfileColour::Brown => {
                ColourBucket::Light
            }
            ProfileColour::Black | ProfileColour::Grey | ProfileColour::Champagne => {
                ColourBucket::Dark
            }
        }
    }
}

impl FromStr for ProfileColour {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileColour::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| PricingError::InvalidColour(s.to_string()))
    }
}

impl fmt::Display for ProfileColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile price group. Every colour maps onto exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourBucket {
    /// White, silver, brown.
    Light,
    /// Black, grey, champagne.
    Dark,
}
