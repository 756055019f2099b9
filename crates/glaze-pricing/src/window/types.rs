//! Window type keys and partition styles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// One of the nineteen priced window products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowType {
    Type1,
    Type2,
    Type3,
    Type4,
    Type5,
    Type6,
    Type7,
    Type8,
    Type9,
    Type10,
    Type11,
    Type12,
    Type13,
    Type14,
    Type15,
    Type16,
    Type17,
    Type18,
    Type19,
}

impl WindowType {
    /// All window types.
    pub const ALL: [WindowType; 19] = [
        WindowType::Type1,
        WindowType::Type2,
        WindowType::Type3,
        WindowType::Type4,
        WindowType::Type5,
        WindowType::Type6,
        WindowType::Type7,
        WindowType::Type8,
        WindowType::Type9,
        WindowType::Type10,
        WindowType::Type11,
        WindowType::Type12,
        WindowType::Type13,
        WindowType::Type14,
        WindowType::Type15,
        WindowType::Type16,
        WindowType::Type17,
        WindowType::Type18,
        WindowType::Type19,
    ];

    /// Get the type key (e.g., "type4").
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowType::Type1 => "type1",
            WindowType::Type2 => "type2",
            WindowType::Type3 => "type3",
            WindowType::Type4 => "type4",
            WindowType::Type5 => "type5",
            WindowType::Type6 => "type6",
            WindowType::Type7 => "type7",
            WindowType::Type8 => "type8",
            WindowType::Type9 => "type9",
            WindowType::Type10 => "type10",
            WindowType::Type11 => "type11",
            WindowType::Type12 => "type12",
            WindowType::Type13 => "type13",
            WindowType::Type14 => "type14",
            WindowType::Type15 => "type15",
            WindowType::Type16 => "type16",
            WindowType::Type17 => "type17",
            WindowType::Type18 => "type18",
            WindowType::Type19 => "type19",
        }
    }

    /// Short product description.
    pub fn description(&self) -> &'static str {
        match self {
            WindowType::Type1 => "2-panel sliding",
            WindowType::Type2 => "2-panel sliding with fixed light",
            WindowType::Type3 => "2-panel sliding with double fixed lights",
            WindowType::Type4 => "3-panel sliding",
            WindowType::Type5 => "3-panel sliding with fixed light",
            WindowType::Type6 => "3-panel sliding with double fixed lights",
            WindowType::Type7 => "4-panel sliding",
            WindowType::Type8 => "4-panel sliding with fixed light",
            WindowType::Type9 => "4-panel sliding with double fixed lights",
            WindowType::Type10 => "2 openable top vents over fixed bottom",
            WindowType::Type11 => "3 openable top vents over fixed bottom",
            WindowType::Type12 => "4 openable top vents over fixed bottom",
            WindowType::Type13 => "top-hung casement",
            WindowType::Type14 => "centre-hung pivot",
            WindowType::Type15 => "fixed top light over projecting vent",
            WindowType::Type16 => "awning top vent over fixed light",
            WindowType::Type17 => "3-panel folding",
            WindowType::Type18 => "4-panel folding",
            WindowType::Type19 => "curtain-wall fixed light",
        }
    }
}

impl FromStr for WindowType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PricingError::UnknownWindowType(s.to_string()))
    }
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the opening is split between sliding sashes, vents and fixed lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartitionStyle {
    NoPartition,
    FixedBottom,
    FixedTop,
    DoubleFixed,
    OpenAbleTopFxBtm,
    Folding,
}

impl PartitionStyle {
    pub const ALL: [PartitionStyle; 6] = [
        PartitionStyle::NoPartition,
        PartitionStyle::FixedBottom,
        PartitionStyle::FixedTop,
        PartitionStyle::DoubleFixed,
        PartitionStyle::OpenAbleTopFxBtm,
        PartitionStyle::Folding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartitionStyle::NoPartition => "noPartition",
            PartitionStyle::FixedBottom => "fixedBottom",
            PartitionStyle::FixedTop => "fixedTop",
            PartitionStyle::DoubleFixed => "doubleFixed",
            PartitionStyle::OpenAbleTopFxBtm => "openAbleTopFxBtm",
            PartitionStyle::Folding => "folding",
        }
    }

    /// Parse a wire name, returning `None` for unknown styles.
    pub fn parse(s: &str) -> Option<Self> {
        PartitionStyle::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

impl fmt::Display for PartitionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
