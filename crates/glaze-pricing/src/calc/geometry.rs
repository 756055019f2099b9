//! Shared geometry and the component takeoff builder.

use rust_decimal::prelude::*;
use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::breakdown::Component;
use crate::window::Measurements;

/// Glass is cut 25 mm short of the frame on every edge.
const GLASS_ALLOWANCE_M: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Opening size in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub h: Decimal,
    pub w: Decimal,
}

impl From<Measurements> for Dimensions {
    fn from(m: Measurements) -> Self {
        Self {
            h: m.height_m(),
            w: m.width_m(),
        }
    }
}

impl Dimensions {
    /// Outer frame perimeter.
    pub fn perimeter(&self) -> Decimal {
        perimeter(self.h, self.w)
    }

    /// Glass area of the whole opening.
    pub fn glass_area(&self) -> Decimal {
        (self.h - GLASS_ALLOWANCE_M) * (self.w - GLASS_ALLOWANCE_M)
    }

    /// A share of the height, to the millimetre.
    pub fn height_share(&self, ratio: Decimal) -> Decimal {
        (self.h * ratio).round_dp(3)
    }
}

/// Perimeter of a rectangle.
pub fn perimeter(h: Decimal, w: Decimal) -> Decimal {
    Decimal::TWO * (h + w)
}

/// Total perimeter of `n` equal panes splitting a `h` × `w` rectangle
/// side by side.
///
/// Equal to n·2(h + w/n), kept free of the division.
pub fn split_perimeter(n: u8, h: Decimal, w: Decimal) -> Decimal {
    Decimal::TWO * (Decimal::from(n) * h + w)
}

/// Whole number of units needed to cover `length`.
pub fn ceil_div(length: Decimal, unit: Decimal) -> Decimal {
    (length / unit).ceil()
}

/// Component quantities for one window.
///
/// Repeated additions of the same component accumulate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Takeoff {
    quantities: BTreeMap<Component, Decimal>,
}

impl Takeoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a measured quantity. Zero quantities are ignored.
    pub fn add(&mut self, component: Component, quantity: Decimal) -> &mut Self {
        if !quantity.is_zero() {
            *self.quantities.entry(component).or_default() += quantity;
        }
        self
    }

    /// Add a piece count.
    pub fn pieces(&mut self, component: Component, count: u32) -> &mut Self {
        self.add(component, Decimal::from(count))
    }

    pub fn quantity(&self, component: Component) -> Option<Decimal> {
        self.quantities.get(&component).copied()
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}

impl IntoIterator for Takeoff {
    type Item = (Component, Decimal);
    type IntoIter = btree_map::IntoIter<Component, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.quantities.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(h: u32, w: u32) -> Dimensions {
        Measurements::new(h, w).into()
    }

    #[test]
    fn test_glass_area() {
        // (1.2 - 0.05) × (1.5 - 0.05)
        assert_eq!(dims(1200, 1500).glass_area(), Decimal::new(16675, 4));
    }

    #[test]
    fn test_perimeter() {
        assert_eq!(dims(1200, 1500).perimeter(), Decimal::new(54, 1));
    }

    #[test]
    fn test_split_perimeter_matches_panes() {
        let d = dims(1200, 1500);
        let n = Decimal::from(3);
        let by_pane = n * perimeter(d.h, d.w / n);
        assert_eq!(split_perimeter(3, d.h, d.w), by_pane.round_dp(6));
    }

    #[test]
    fn test_height_share_rounds_to_mm() {
        let third = Decimal::ONE / Decimal::from(3);
        assert_eq!(dims(1000, 800).height_share(third), Decimal::new(333, 3));
    }

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div(Decimal::new(25, 1), Decimal::new(12, 1)), Decimal::from(3));
        assert_eq!(ceil_div(Decimal::new(24, 1), Decimal::new(12, 1)), Decimal::from(2));
    }

    #[test]
    fn test_takeoff_accumulates() {
        let mut t = Takeoff::new();
        t.add(Component::Rubber, Decimal::ONE)
            .add(Component::Rubber, Decimal::TWO)
            .pieces(Component::Lock, 0);
        assert_eq!(t.quantity(Component::Rubber), Some(Decimal::from(3)));
        assert_eq!(t.quantity(Component::Lock), None);
        assert_eq!(t.len(), 1);
    }
}
