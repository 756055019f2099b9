//! Sliding windows, types 1 to 9.

use rust_decimal::Decimal;

use super::geometry::{perimeter, split_perimeter, Dimensions, Takeoff};
use super::WindowCalculator;
use crate::breakdown::Component;
use crate::window::WindowType;

/// Fixed lights above or below the sliding sashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedLights {
    None,
    /// One light a third of the height.
    Single,
    /// Two lights a quarter of the height each.
    Double,
}

impl FixedLights {
    fn heights(&self, dims: &Dimensions) -> Vec<Decimal> {
        match self {
            FixedLights::None => Vec::new(),
            FixedLights::Single => vec![dims.height_share(Decimal::ONE / Decimal::from(3))],
            FixedLights::Double => {
                let light = dims.height_share(Decimal::new(25, 2));
                vec![light, light]
            }
        }
    }
}

/// `panels` sliding sashes in one frame, with optional fixed lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sliding {
    pub window_type: WindowType,
    pub panels: u8,
    pub lights: FixedLights,
}

impl WindowCalculator for Sliding {
    fn window_type(&self) -> WindowType {
        self.window_type
    }

    fn takeoff(&self, dims: &Dimensions) -> Takeoff {
        use Component::*;

        let Dimensions { h, w } = *dims;
        let n = Decimal::from(self.panels);
        let lights = self.lights.heights(dims);
        let sash = h - lights.iter().copied().sum::<Decimal>();

        let mut t = Takeoff::new();

        // Outer frame
        t.add(JambP, Decimal::TWO * h)
            .add(HeaderP, w)
            .add(SillP, w);

        // Sashes
        t.add(LockSection, Decimal::TWO * sash)
            .add(InterLock, Decimal::TWO * (n - Decimal::ONE) * sash)
            .add(TopBottom, Decimal::TWO * w);

        // Sealing
        t.add(WoolFile, split_perimeter(self.panels, sash, w))
            .add(Rubber, split_perimeter(self.panels, sash, w));

        for light in lights {
            t.add(Tube, w)
                .add(ButterFly, perimeter(light, w))
                .add(JambCover, Decimal::TWO * light)
                .add(Rubber, perimeter(light, w));
        }

        // Hardware
        let panels = u32::from(self.panels);
        t.pieces(Rollers, 2 * panels)
            .pieces(Guiders, 2 * panels)
            .pieces(Lock, panels.div_ceil(2));

        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::Measurements;

    fn takeoff(panels: u8, lights: FixedLights, h: u32, w: u32) -> Takeoff {
        Sliding {
            window_type: WindowType::Type1,
            panels,
            lights,
        }
        .takeoff(&Measurements::new(h, w).into())
    }

    #[test]
    fn test_three_panel_no_partition() {
        let t = takeoff(3, FixedLights::None, 1200, 1500);
        let q = |c| t.quantity(c).unwrap();
        assert_eq!(q(Component::JambP), Decimal::new(24, 1));
        assert_eq!(q(Component::HeaderP), Decimal::new(15, 1));
        assert_eq!(q(Component::LockSection), Decimal::new(24, 1));
        assert_eq!(q(Component::InterLock), Decimal::new(48, 1));
        assert_eq!(q(Component::TopBottom), Decimal::from(3));
        // 2·3·1.2 + 2·1.5
        assert_eq!(q(Component::WoolFile), Decimal::new(102, 1));
        assert_eq!(q(Component::Rollers), Decimal::from(6));
        assert_eq!(q(Component::Lock), Decimal::from(2));
        assert_eq!(t.quantity(Component::Tube), None);
        assert_eq!(t.quantity(Component::ButterFly), None);
    }

    #[test]
    fn test_single_fixed_light() {
        let t = takeoff(2, FixedLights::Single, 1500, 1000);
        let q = |c| t.quantity(c).unwrap();
        // Light 0.5 m, sash 1.0 m
        assert_eq!(q(Component::LockSection), Decimal::from(2));
        assert_eq!(q(Component::InterLock), Decimal::from(2));
        assert_eq!(q(Component::Tube), Decimal::ONE);
        assert_eq!(q(Component::ButterFly), Decimal::from(3));
        assert_eq!(q(Component::JambCover), Decimal::ONE);
        // Sash panes 2·2·1.0 + 2·1.0, light pane 2·(0.5 + 1.0)
        assert_eq!(q(Component::Rubber), Decimal::from(9));
        assert_eq!(q(Component::Lock), Decimal::ONE);
    }

    #[test]
    fn test_double_fixed_lights() {
        let t = takeoff(4, FixedLights::Double, 2000, 2400);
        let q = |c| t.quantity(c).unwrap();
        // Two 0.5 m lights, sash 1.0 m
        assert_eq!(q(Component::Tube), Decimal::new(48, 1));
        assert_eq!(q(Component::JambCover), Decimal::from(2));
        assert_eq!(q(Component::InterLock), Decimal::from(6));
        assert_eq!(q(Component::Guiders), Decimal::from(8));
    }
}
