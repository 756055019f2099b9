//! Cart error types.

use glaze_pricing::PricingError;
use thiserror::Error;

use crate::ids::{CartId, LineItemId};
use crate::store::StoreError;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// The window could not be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Item missing from the cart or already removed.
    #[error("Item not in cart: {0}")]
    ItemNotFound(LineItemId),

    /// The cart store failed or did not answer in time. Retryable.
    #[error("Cart store unavailable: {0}")]
    StoreUnavailable(String),

    /// Nothing to save.
    #[error("Cart is empty: {0}")]
    EmptyCart(CartId),

    /// Quantity below one or above the per-item limit.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart totals")]
    Overflow,
}

impl CartError {
    /// Check if the operation may succeed when retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CartError::StoreUnavailable(_))
    }

    /// Check if this error was caused by shopper input.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            CartError::Pricing(e) => e.is_invalid_input(),
            CartError::ItemNotFound(_) | CartError::EmptyCart(_) | CartError::InvalidQuantity(_) => {
                true
            }
            CartError::StoreUnavailable(_) | CartError::Overflow => false,
        }
    }
}

impl From<StoreError> for CartError {
    fn from(e: StoreError) -> Self {
        CartError::StoreUnavailable(e.to_string())
    }
}
