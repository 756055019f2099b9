//! Window cost calculators.
//!
//! Each of the nineteen window types is served by one of five topology
//! families. A calculator only produces component quantities; pricing them
//! against a table snapshot is shared.

pub mod geometry;

mod curtain;
mod folding;
mod openable;
mod projected;
mod sliding;

pub use curtain::CurtainWall;
pub use folding::Folding;
pub use geometry::{Dimensions, Takeoff};
pub use openable::OpenableTop;
pub use projected::{Projected, ProjectedKind};
pub use sliding::{FixedLights, Sliding};

use crate::breakdown::{Component, CostBreakdown};
use crate::config::prices::PriceTable;
use crate::error::PricingError;
use crate::window::{Measurements, WindowType};

/// Turns measurements into a priced breakdown.
pub trait WindowCalculator {
    /// The window type this calculator is registered for.
    fn window_type(&self) -> WindowType;

    /// Component quantities for one unit.
    fn takeoff(&self, dims: &Dimensions) -> Takeoff;

    /// Compute the cost of one unit against an immutable price table.
    fn compute(
        &self,
        measurements: Measurements,
        table: &PriceTable,
    ) -> Result<CostBreakdown, PricingError> {
        measurements.validate()?;

        let dims = Dimensions::from(measurements);
        let mut takeoff = self.takeoff(&dims);
        takeoff.add(Component::Glass, dims.glass_area());

        CostBreakdown::price(
            self.window_type(),
            measurements,
            takeoff,
            dims.perimeter(),
            table,
        )
    }
}

/// A registered calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculator {
    Sliding(Sliding),
    OpenableTop(OpenableTop),
    Projected(Projected),
    Folding(Folding),
    CurtainWall(CurtainWall),
}

impl WindowCalculator for Calculator {
    fn window_type(&self) -> WindowType {
        match self {
            Calculator::Sliding(c) => c.window_type(),
            Calculator::OpenableTop(c) => c.window_type(),
            Calculator::Projected(c) => c.window_type(),
            Calculator::Folding(c) => c.window_type(),
            Calculator::CurtainWall(c) => c.window_type(),
        }
    }

    fn takeoff(&self, dims: &Dimensions) -> Takeoff {
        match self {
            Calculator::Sliding(c) => c.takeoff(dims),
            Calculator::OpenableTop(c) => c.takeoff(dims),
            Calculator::Projected(c) => c.takeoff(dims),
            Calculator::Folding(c) => c.takeoff(dims),
            Calculator::CurtainWall(c) => c.takeoff(dims),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::window::calculator;
    use rust_decimal::Decimal;

    #[test]
    fn test_total_law_for_every_type() {
        let table = PriceTable::default();
        for t in WindowType::ALL {
            for (h, w) in [(100, 100), (1200, 1500), (2437, 3011), (9999, 9999)] {
                let b = calculator(t)
                    .compute(Measurements::new(h, w), &table)
                    .unwrap();
                let lines: Money = b.lines().iter().map(|l| l.cost).sum();
                assert_eq!(b.subtotal().unwrap(), lines, "{t} {h}x{w}");
                assert_eq!(
                    b.total_cost().unwrap(),
                    b.subtotal().unwrap() + b.installation_cost().unwrap(),
                    "{t} {h}x{w}"
                );
                assert!(b.cost_of(Component::Glass).unwrap().is_positive());
                assert!(b.lines().iter().all(|l| l.quantity > Decimal::ZERO));
            }
        }
    }

    #[test]
    fn test_invalid_measurement_produces_nothing() {
        let table = PriceTable::default();
        for t in WindowType::ALL {
            let err = calculator(t)
                .compute(Measurements::new(1200, 50), &table)
                .unwrap_err();
            assert_eq!(
                err,
                PricingError::InvalidMeasurement {
                    height_mm: 1200,
                    width_mm: 50
                }
            );
        }
    }

    #[test]
    fn test_prices_come_from_the_supplied_table() {
        let mut table = PriceTable::default();
        table.prices.glass = Decimal::from(1000);
        let b = calculator(WindowType::Type1)
            .compute(Measurements::new(1050, 1050), &table)
            .unwrap();
        // 1 m² of glass
        assert_eq!(b.cost_of(Component::Glass), Some(Money::new(100000)));
    }
}
