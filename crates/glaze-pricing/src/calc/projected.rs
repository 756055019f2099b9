//! Single-frame projected windows, types 13 to 16.

use rust_decimal::Decimal;

use super::geometry::{perimeter, Dimensions, Takeoff};
use super::WindowCalculator;
use crate::breakdown::Component;
use crate::window::WindowType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectedKind {
    /// Whole sash hung from the head.
    TopHung,
    /// Whole sash pivoting on a centre rail.
    CentreHung,
    /// Fixed top light over a projecting bottom vent.
    ProjectingLight,
    /// Projecting top vent over a fixed bottom light.
    AwningTop,
}

impl ProjectedKind {
    /// Vent height as a share of the opening height, for split frames.
    fn vent_ratio(&self) -> Option<Decimal> {
        match self {
            ProjectedKind::TopHung | ProjectedKind::CentreHung => None,
            ProjectedKind::ProjectingLight => Some(Decimal::new(4, 1)),
            ProjectedKind::AwningTop => Some(Decimal::new(3, 1)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projected {
    pub window_type: WindowType,
    pub kind: ProjectedKind,
}

impl WindowCalculator for Projected {
    fn window_type(&self) -> WindowType {
        self.window_type
    }

    fn takeoff(&self, dims: &Dimensions) -> Takeoff {
        use Component::*;

        let Dimensions { h, w } = *dims;
        let frame = perimeter(h, w);
        let mut t = Takeoff::new();

        t.add(POutter, frame);

        match self.kind.vent_ratio() {
            None => {
                t.add(PInner, frame)
                    .add(ProjectBidding, frame)
                    .add(Rubber, frame)
                    .pieces(SideArms, 2);
                if self.kind == ProjectedKind::CentreHung {
                    t.add(PInnerDiv, w).pieces(ProjectHandle, 2);
                } else {
                    t.pieces(ProjectHandle, 1);
                }
            }
            Some(ratio) => {
                let vent = dims.height_share(ratio);
                let fixed = h - vent;
                t.add(SingleHeader, w)
                    .add(PInner, perimeter(vent, w))
                    .add(ProjectBidding, perimeter(fixed, w))
                    .add(Rubber, perimeter(vent, w))
                    .add(Rubber, perimeter(fixed, w))
                    .pieces(SideArms, 2)
                    .pieces(ProjectHandle, 1);
                if self.kind == ProjectedKind::AwningTop {
                    t.add(JambCover, Decimal::TWO * h);
                }
            }
        }

        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::Measurements;

    fn takeoff(kind: ProjectedKind) -> Takeoff {
        Projected {
            window_type: WindowType::Type13,
            kind,
        }
        .takeoff(&Measurements::new(1000, 800).into())
    }

    #[test]
    fn test_top_hung() {
        let t = takeoff(ProjectedKind::TopHung);
        for c in [
            Component::POutter,
            Component::PInner,
            Component::ProjectBidding,
            Component::Rubber,
        ] {
            assert_eq!(t.quantity(c), Some(Decimal::new(36, 1)));
        }
        assert_eq!(t.quantity(Component::ProjectHandle), Some(Decimal::ONE));
        assert_eq!(t.quantity(Component::PInnerDiv), None);
    }

    #[test]
    fn test_centre_hung_adds_pivot_rail() {
        let t = takeoff(ProjectedKind::CentreHung);
        assert_eq!(t.quantity(Component::PInnerDiv), Some(Decimal::new(8, 1)));
        assert_eq!(t.quantity(Component::ProjectHandle), Some(Decimal::TWO));
        assert_eq!(t.quantity(Component::SideArms), Some(Decimal::TWO));
    }

    #[test]
    fn test_projecting_light() {
        let t = takeoff(ProjectedKind::ProjectingLight);
        // Vent 0.4 m, fixed 0.6 m
        assert_eq!(t.quantity(Component::PInner), Some(Decimal::new(24, 1)));
        assert_eq!(t.quantity(Component::ProjectBidding), Some(Decimal::new(28, 1)));
        assert_eq!(t.quantity(Component::SingleHeader), Some(Decimal::new(8, 1)));
        assert_eq!(t.quantity(Component::Rubber), Some(Decimal::new(52, 1)));
        assert_eq!(t.quantity(Component::JambCover), None);
    }

    #[test]
    fn test_awning_top() {
        let t = takeoff(ProjectedKind::AwningTop);
        // Vent 0.3 m, fixed 0.7 m
        assert_eq!(t.quantity(Component::PInner), Some(Decimal::new(22, 1)));
        assert_eq!(t.quantity(Component::ProjectBidding), Some(Decimal::from(3)));
        assert_eq!(t.quantity(Component::JambCover), Some(Decimal::TWO));
    }
}
