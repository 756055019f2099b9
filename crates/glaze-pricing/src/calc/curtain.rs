//! Curtain-wall fixed light, type 19.

use rust_decimal::Decimal;

use super::geometry::{ceil_div, perimeter, Dimensions, Takeoff};
use super::WindowCalculator;
use crate::breakdown::Component;
use crate::window::WindowType;

/// Largest pane edge before a mullion or transom is needed.
const GRID_M: Decimal = Decimal::from_parts(12, 0, 0, false, 1);

/// Metres of sealing bead per silicone tube.
const BEAD_PER_TUBE_M: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurtainWall {
    pub window_type: WindowType,
}

impl WindowCalculator for CurtainWall {
    fn window_type(&self) -> WindowType {
        self.window_type
    }

    fn takeoff(&self, dims: &Dimensions) -> Takeoff {
        use Component::*;

        let Dimensions { h, w } = *dims;
        let cols = ceil_div(w, GRID_M);
        let rows = ceil_div(h, GRID_M);

        // Sum of the pane perimeters.
        let tape = Decimal::TWO * (cols * h + rows * w);

        let mut t = Takeoff::new();
        t.add(CurtainWallingP, perimeter(h, w))
            .add(
                CurtainWallingPInner,
                (cols - Decimal::ONE) * h + (rows - Decimal::ONE) * w,
            )
            .add(DoubleTape, tape)
            .add(Silicone, ceil_div(tape, BEAD_PER_TUBE_M));

        t
    }
}
