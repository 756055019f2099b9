//! Folding windows, types 17 and 18.

use rust_decimal::Decimal;

use super::geometry::{perimeter, split_perimeter, Dimensions, Takeoff};
use super::WindowCalculator;
use crate::breakdown::Component;
use crate::window::WindowType;

/// `panels` hinged leaves running on a top rail and bottom track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Folding {
    pub window_type: WindowType,
    pub panels: u8,
}

/// Hinges between two neighbouring leaves.
const HINGES_PER_JOINT: u32 = 3;

impl WindowCalculator for Folding {
    fn window_type(&self) -> WindowType {
        self.window_type
    }

    fn takeoff(&self, dims: &Dimensions) -> Takeoff {
        use Component::*;

        let Dimensions { h, w } = *dims;
        let panes = split_perimeter(self.panels, h, w);
        let panels = u32::from(self.panels);

        let mut t = Takeoff::new();
        t.add(FoldingOutterFrameP, perimeter(h, w))
            .add(FoldingTopRailP, w)
            .add(FoldingBottomTrackP, w)
            .add(FoldingSashP, panes)
            .add(FoldingBeading, panes)
            .add(FoldingRubber, panes);

        t.pieces(FoldingRollers, panels)
            .pieces(FoldingGuiders, panels)
            .pieces(FoldingHinges, HINGES_PER_JOINT * (panels - 1))
            .pieces(FoldingLock, 1);

        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::Measurements;

    #[test]
    fn test_four_leaves() {
        let t = Folding {
            window_type: WindowType::Type18,
            panels: 4,
        }
        .takeoff(&Measurements::new(2100, 2400).into());
        let q = |c| t.quantity(c).unwrap();

        assert_eq!(q(Component::FoldingOutterFrameP), Decimal::from(9));
        assert_eq!(q(Component::FoldingTopRailP), Decimal::new(24, 1));
        // 2·4·2.1 + 2·2.4
        assert_eq!(q(Component::FoldingSashP), Decimal::new(216, 1));
        assert_eq!(q(Component::FoldingBeading), Decimal::new(216, 1));
        assert_eq!(q(Component::FoldingHinges), Decimal::from(9));
        assert_eq!(q(Component::FoldingRollers), Decimal::from(4));
        assert_eq!(q(Component::FoldingLock), Decimal::ONE);
    }

    #[test]
    fn test_three_leaves_have_two_joints() {
        let t = Folding {
            window_type: WindowType::Type17,
            panels: 3,
        }
        .takeoff(&Measurements::new(1000, 1500).into());
        assert_eq!(t.quantity(Component::FoldingHinges), Some(Decimal::from(6)));
    }
}
