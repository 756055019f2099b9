//! Pricing error types.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while pricing a window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Height or width outside the supported range.
    #[error(
        "Invalid measurement: height {height_mm}mm, width {width_mm}mm \
         (each must be between 100 and 9999mm)"
    )]
    InvalidMeasurement { height_mm: u32, width_mm: u32 },

    /// No window type resolves from the panel/partition choice.
    #[error("Unsupported window configuration: panels={panel_count}, partition={partition_style}")]
    UnsupportedConfiguration {
        panel_count: u8,
        partition_style: String,
    },

    /// Unknown glass type/thickness pair.
    #[error("Invalid glass type/thickness combination: {glass_type}/{thickness}")]
    InvalidGlassSpec {
        glass_type: String,
        thickness: String,
    },

    /// Unknown profile colour.
    #[error("Invalid profile colour: {0}")]
    InvalidColour(String),

    /// Unknown window type key.
    #[error("Unknown window type: {0}")]
    UnknownWindowType(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cost calculation")]
    Overflow,
}

impl PricingError {
    /// Check if this error was caused by shopper input.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, PricingError::Overflow)
    }
}

/// Errors raised by a price table sink.
///
/// These never fail a pricing update; the store logs and moves on.
#[derive(Error, Debug)]
pub enum PersistError {
    /// The backing store could not be reached or rejected the write.
    #[error("Config store unavailable: {0}")]
    Unavailable(String),

    /// The backing store did not answer in time.
    #[error("Config store timed out after {0:?}")]
    Timeout(Duration),
}
