//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation so that component costs,
//! subtotals and cart totals are exact integer sums. Unit prices and
//! quantities are decimals; a line is converted to `Money` exactly once,
//! rounding half away from zero to the cent.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// Number of minor units per major unit.
const CENTS_PER_UNIT: i64 = 100;

/// A monetary value in minor currency units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a zero amount.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Create a Money value from a decimal amount in major units.
    ///
    /// Returns `None` if the rounded amount does not fit in an `i64`.
    ///
    /// ```
    /// use glaze_pricing::money::Money;
    /// use rust_decimal::Decimal;
    /// let price = Money::from_decimal(Decimal::new(300_155, 3)).unwrap();
    /// assert_eq!(price.amount_cents, 30016);
    /// ```
    pub fn from_decimal(amount: Decimal) -> Option<Self> {
        let cents = amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::from(CENTS_PER_UNIT))?;
        cents.to_i64().map(Self::new)
    }

    /// Convert to a decimal value in major units.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.amount_cents, 2)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Format as a display string (e.g., "1539.00").
    pub fn display(&self) -> String {
        format!("{:.2}", self.to_decimal())
    }

    /// Try to add another Money value, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount_cents.checked_add(other.amount_cents).map(Money::new)
    }

    /// Try to multiply by an integer factor, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents.checked_mul(factor).map(Money::new)
    }

    /// Sum an iterator of Money values, returning None on overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents + other.amount_cents)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.amount_cents += other.amount_cents;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.amount_cents - other.amount_cents)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(4999);
        assert_eq!(m.amount_cents, 4999);
        assert_eq!(m.display(), "49.99");
    }

    #[test]
    fn test_money_from_decimal_rounds_half_up() {
        assert_eq!(Money::from_decimal(Decimal::new(1005, 3)), Some(Money::new(101)));
        assert_eq!(Money::from_decimal(Decimal::new(1004, 3)), Some(Money::new(100)));
        assert_eq!(Money::from_decimal(Decimal::from(180)), Some(Money::new(18000)));
    }

    #[test]
    fn test_money_from_decimal_overflow() {
        assert_eq!(Money::from_decimal(Decimal::MAX), None);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(153900);
        assert_eq!(m.to_decimal(), Decimal::from(1539));
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000);
        let b = Money::new(500);
        assert_eq!((a + b).amount_cents, 1500);
        assert_eq!((a - b).amount_cents, 500);
    }

    #[test]
    fn test_money_checked_ops() {
        assert_eq!(Money::new(i64::MAX).try_add(&Money::new(1)), None);
        assert_eq!(Money::new(250).try_multiply(4), Some(Money::new(1000)));
        assert_eq!(Money::new(i64::MAX).try_multiply(2), None);
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::new(100), Money::new(250), Money::new(5)];
        assert_eq!(Money::try_sum(values.iter()), Some(Money::new(355)));
        assert_eq!(values.into_iter().sum::<Money>(), Money::new(355));
    }
}
