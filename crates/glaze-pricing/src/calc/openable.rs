//! Openable top vents over a fixed bottom, types 10 to 12.

use rust_decimal::Decimal;

use super::geometry::{perimeter, split_perimeter, Dimensions, Takeoff};
use super::WindowCalculator;
use crate::breakdown::Component;
use crate::window::WindowType;

/// `vents` projecting vents across the top, one fixed pane under each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenableTop {
    pub window_type: WindowType,
    pub vents: u8,
}

impl OpenableTop {
    /// Vent height as a share of the opening height.
    pub const VENT_RATIO: Decimal = Decimal::from_parts(35, 0, 0, false, 2);
}

impl WindowCalculator for OpenableTop {
    fn window_type(&self) -> WindowType {
        self.window_type
    }

    fn takeoff(&self, dims: &Dimensions) -> Takeoff {
        use Component::*;

        let Dimensions { h, w } = *dims;
        let mullions = Decimal::from(self.vents) - Decimal::ONE;
        let vent = dims.height_share(Self::VENT_RATIO);
        let fixed = h - vent;

        let mut t = Takeoff::new();

        t.add(JambP, Decimal::TWO * h)
            .add(HeaderP, w)
            .add(SillP, w)
            .add(Tube, w);

        // Vents
        t.add(POutter, perimeter(vent, w))
            .add(PInner, split_perimeter(self.vents, vent, w))
            .add(PInnerDiv, mullions * vent);

        // Fixed bottom
        t.add(ProjectBidding, perimeter(fixed, w))
            .add(Divider, mullions * fixed);

        t.add(Rubber, split_perimeter(self.vents, vent, w))
            .add(Rubber, split_perimeter(self.vents, fixed, w));

        let vents = u32::from(self.vents);
        t.pieces(SideArms, 2 * vents)
            .pieces(ProjectHandle, vents);

        t
    }
}
