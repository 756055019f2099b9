//! Itemized cost of one window unit.
//!
//! A [`CostBreakdown`] holds priced component lines and the installation
//! basis; its aggregates are computed on demand. [`MaterializedBreakdown`]
//! is the plain form that gets persisted with a cart line item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::calc::geometry::Takeoff;
use crate::config::prices::PriceTable;
use crate::error::PricingError;
use crate::money::Money;
use crate::window::{Measurements, WindowType};

/// A priced physical component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Component {
    // Outer frame
    JambP,
    HeaderP,
    SillP,
    Tube,
    // Inner frame
    InterLock,
    LockSection,
    TopBottom,
    Divider,
    // Glazing beads and covers
    ButterFly,
    JambCover,
    SingleHeader,
    // Projected windows
    POutter,
    PInner,
    PInnerDiv,
    ProjectBidding,
    // Curtain walling
    CurtainWallingP,
    CurtainWallingPInner,
    // Folding
    FoldingTopRailP,
    FoldingBottomTrackP,
    FoldingSashP,
    FoldingBeading,
    FoldingOutterFrameP,
    // Hardware
    Rollers,
    Lock,
    Guiders,
    SideArms,
    ProjectHandle,
    FoldingRollers,
    FoldingLock,
    FoldingGuiders,
    FoldingHinges,
    // Glass and sealing
    Glass,
    Rubber,
    WoolFile,
    DoubleTape,
    Silicone,
    FoldingRubber,
}

/// How a component is measured and priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Metre,
    SquareMetre,
    Piece,
    Tube,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Metre => "m",
            Unit::SquareMetre => "m²",
            Unit::Piece => "pc",
            Unit::Tube => "tube",
        }
    }
}

impl Component {
    /// Get the wire name (e.g., "pInnerDiv").
    pub fn as_str(&self) -> &'static str {
        use Component::*;

        match self {
            JambP => "jambP",
            HeaderP => "headerP",
            SillP => "sillP",
            Tube => "tube",
            InterLock => "interLock",
            LockSection => "lockSection",
            TopBottom => "topBottom",
            Divider => "divider",
            ButterFly => "butterFly",
            JambCover => "jambCover",
            SingleHeader => "singleHeader",
            POutter => "pOutter",
            PInner => "pInner",
            PInnerDiv => "pInnerDiv",
            ProjectBidding => "projectBidding",
            CurtainWallingP => "curtainWallingP",
            CurtainWallingPInner => "curtainWallingPInner",
            FoldingTopRailP => "foldingTopRailP",
            FoldingBottomTrackP => "foldingBottomTrackP",
            FoldingSashP => "foldingSashP",
            FoldingBeading => "foldingBeading",
            FoldingOutterFrameP => "foldingOutterFrameP",
            Rollers => "rollers",
            Lock => "lock",
            Guiders => "guiders",
            SideArms => "sideArms",
            ProjectHandle => "projectHandle",
            FoldingRollers => "foldingRollers",
            FoldingLock => "foldingLock",
            FoldingGuiders => "foldingGuiders",
            FoldingHinges => "foldingHinges",
            Glass => "glass",
            Rubber => "rubber",
            WoolFile => "woolFile",
            DoubleTape => "doubleTape",
            Silicone => "silicone",
            FoldingRubber => "foldingRubber",
        }
    }

    /// The cart totals group this component is summed into.
    pub fn group(&self) -> ComponentGroup {
        use Component::*;

        match self {
            Rubber | DoubleTape | Silicone | FoldingRubber => ComponentGroup::Rubber,
            WoolFile => ComponentGroup::WoolFile,
            Rollers | FoldingRollers => ComponentGroup::Rollers,
            Lock | FoldingLock => ComponentGroup::Lock,
            Guiders | FoldingGuiders => ComponentGroup::Guiders,
            SideArms | FoldingHinges => ComponentGroup::SideArms,
            ProjectHandle => ComponentGroup::ProjectHandle,
            Glass => ComponentGroup::Glass,
            _ => ComponentGroup::AluminiumFraming,
        }
    }

    /// Unit of measure.
    pub fn unit(&self) -> Unit {
        use Component::*;

        match self {
            Glass => Unit::SquareMetre,
            Silicone => Unit::Tube,
            Rollers | Lock | Guiders | SideArms | ProjectHandle | FoldingRollers | FoldingLock
            | FoldingGuiders | FoldingHinges => Unit::Piece,
            _ => Unit::Metre,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cart totals group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentGroup {
    AluminiumFraming,
    Rubber,
    WoolFile,
    Rollers,
    Lock,
    Guiders,
    SideArms,
    ProjectHandle,
    Glass,
    Installation,
}

impl ComponentGroup {
    /// All groups, in display order.
    pub const ALL: [ComponentGroup; 10] = [
        ComponentGroup::AluminiumFraming,
        ComponentGroup::Rubber,
        ComponentGroup::WoolFile,
        ComponentGroup::Rollers,
        ComponentGroup::Lock,
        ComponentGroup::Guiders,
        ComponentGroup::SideArms,
        ComponentGroup::ProjectHandle,
        ComponentGroup::Glass,
        ComponentGroup::Installation,
    ];

    /// Get the wire name (e.g., "aluminiumFraming").
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentGroup::AluminiumFraming => "aluminiumFraming",
            ComponentGroup::Rubber => "rubber",
            ComponentGroup::WoolFile => "woolFile",
            ComponentGroup::Rollers => "rollers",
            ComponentGroup::Lock => "lock",
            ComponentGroup::Guiders => "guiders",
            ComponentGroup::SideArms => "sideArms",
            ComponentGroup::ProjectHandle => "projectHandle",
            ComponentGroup::Glass => "glass",
            ComponentGroup::Installation => "installation",
        }
    }
}

/// One priced component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentLine {
    pub component: Component,
    /// Metres, m², pieces or tubes depending on the component.
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// quantity × unit price, rounded to the cent.
    pub cost: Money,
}

/// Inputs of the installation charge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstallationBasis {
    /// Frame perimeter in metres.
    pub perimeter_m: Decimal,
    /// Base rate per metre of perimeter.
    pub install_base: Decimal,
    /// Installation factor.
    pub install_pc: Decimal,
}

impl InstallationBasis {
    /// perimeter × base × factor, rounded to the cent.
    pub fn cost(&self) -> Result<Money, PricingError> {
        let amount = self
            .perimeter_m
            .checked_mul(self.install_base)
            .and_then(|v| v.checked_mul(self.install_pc))
            .ok_or(PricingError::Overflow)?;
        Money::from_decimal(amount).ok_or(PricingError::Overflow)
    }
}

/// Cost of a single window unit.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    window_type: WindowType,
    measurements: Measurements,
    price_version: u64,
    lines: Vec<ComponentLine>,
    installation: InstallationBasis,
}

impl CostBreakdown {
    /// Price a takeoff against a table snapshot.
    pub fn price(
        window_type: WindowType,
        measurements: Measurements,
        takeoff: Takeoff,
        perimeter_m: Decimal,
        table: &PriceTable,
    ) -> Result<Self, PricingError> {
        let lines = takeoff
            .into_iter()
            .map(|(component, quantity)| {
                let unit_price = table.unit_price(component);
                let cost = quantity
                    .checked_mul(unit_price)
                    .and_then(Money::from_decimal)
                    .ok_or(PricingError::Overflow)?;
                Ok(ComponentLine {
                    component,
                    quantity,
                    unit_price,
                    cost,
                })
            })
            .collect::<Result<Vec<_>, PricingError>>()?;

        Ok(Self {
            window_type,
            measurements,
            price_version: table.version,
            lines,
            installation: InstallationBasis {
                perimeter_m,
                install_base: table.prices.install_base,
                install_pc: table.prices.install_pc,
            },
        })
    }

    pub fn window_type(&self) -> WindowType {
        self.window_type
    }

    pub fn measurements(&self) -> Measurements {
        self.measurements
    }

    /// Version of the table the lines were priced from.
    pub fn price_version(&self) -> u64 {
        self.price_version
    }

    pub fn lines(&self) -> &[ComponentLine] {
        &self.lines
    }

    pub fn installation(&self) -> &InstallationBasis {
        &self.installation
    }

    /// Cost of one component, if it is used by this window.
    pub fn cost_of(&self, component: Component) -> Option<Money> {
        self.lines
            .iter()
            .find(|l| l.component == component)
            .map(|l| l.cost)
    }

    /// Sum of all component costs, excluding installation.
    pub fn subtotal(&self) -> Result<Money, PricingError> {
        Money::try_sum(self.lines.iter().map(|l| &l.cost)).ok_or(PricingError::Overflow)
    }

    pub fn installation_cost(&self) -> Result<Money, PricingError> {
        self.installation.cost()
    }

    /// Subtotal plus installation.
    pub fn total_cost(&self) -> Result<Money, PricingError> {
        self.subtotal()?
            .try_add(&self.installation_cost()?)
            .ok_or(PricingError::Overflow)
    }

    /// Force every aggregate into a plain, persistable value.
    pub fn materialize(&self) -> Result<MaterializedBreakdown, PricingError> {
        let components = self.lines.iter().map(|l| (l.component, l.cost)).collect();
        Ok(MaterializedBreakdown {
            window_type: self.window_type,
            measurements: self.measurements,
            components,
            subtotal: self.subtotal()?,
            installation: self.installation_cost()?,
            total_cost: self.total_cost()?,
        })
    }
}

/// Fully computed breakdown, safe to persist and send over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterializedBreakdown {
    pub window_type: WindowType,
    #[serde(flatten)]
    pub measurements: Measurements,
    pub components: BTreeMap<Component, Money>,
    pub subtotal: Money,
    pub installation: Money,
    pub total_cost: Money,
}

impl MaterializedBreakdown {
    /// Sum of the component costs falling into one totals group.
    pub fn group_total(&self, group: ComponentGroup) -> Money {
        if group == ComponentGroup::Installation {
            return self.installation;
        }
        self.components
            .iter()
            .filter(|(c, _)| c.group() == group)
            .map(|(_, cost)| *cost)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CostBreakdown {
        let mut takeoff = Takeoff::new();
        takeoff.add(Component::JambP, Decimal::new(24, 1));
        takeoff.add(Component::Glass, Decimal::new(16575, 4));
        takeoff.pieces(Component::Lock, 1);
        takeoff.add(Component::Silicone, Decimal::from(2));

        CostBreakdown::price(
            WindowType::Type19,
            Measurements::new(1200, 1500),
            takeoff,
            Decimal::new(54, 1),
            &PriceTable::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_line_costs() {
        let breakdown = sample();
        assert_eq!(breakdown.cost_of(Component::JambP), Some(Money::new(144000)));
        // 1.6575 m² × 130 = 215.475
        assert_eq!(breakdown.cost_of(Component::Glass), Some(Money::new(21548)));
        assert_eq!(breakdown.cost_of(Component::Lock), Some(Money::new(95000)));
        assert_eq!(breakdown.cost_of(Component::Tube), None);
    }

    #[test]
    fn test_aggregates() {
        let breakdown = sample();
        let subtotal = breakdown.subtotal().unwrap();
        assert_eq!(subtotal, Money::new(144000 + 21548 + 95000 + 80000));
        // 5.4 m × 1000 × 0.285
        assert_eq!(breakdown.installation_cost().unwrap(), Money::new(153900));
        assert_eq!(
            breakdown.total_cost().unwrap(),
            subtotal + Money::new(153900)
        );
    }

    #[test]
    fn test_materialized_groups_cover_total() {
        let m = sample().materialize().unwrap();
        let sum: Money = ComponentGroup::ALL.iter().map(|g| m.group_total(*g)).sum();
        assert_eq!(sum, m.total_cost);
        assert_eq!(m.group_total(ComponentGroup::Rubber), Money::new(80000));
    }

    #[test]
    fn test_every_component_has_a_group() {
        // Installation is never a component group.
        let mut takeoff = Takeoff::new();
        takeoff.pieces(Component::FoldingHinges, 1);
        let b = CostBreakdown::price(
            WindowType::Type17,
            Measurements::new(1000, 1000),
            takeoff,
            Decimal::from(4),
            &PriceTable::default(),
        )
        .unwrap();
        assert_eq!(b.lines()[0].component.group(), ComponentGroup::SideArms);
        assert_eq!(Component::FoldingBeading.group(), ComponentGroup::AluminiumFraming);
        assert_eq!(Component::DoubleTape.group(), ComponentGroup::Rubber);
    }

    #[test]
    fn test_materialized_wire_format() {
        let json = serde_json::to_value(sample().materialize().unwrap()).unwrap();
        assert_eq!(json["windowType"], "type19");
        assert_eq!(json["height"], 1200);
        assert_eq!(json["components"]["jambP"], 144000);
        assert!(json.get("totalCost").is_some());
    }

    #[test]
    fn test_group_names_match_wire_format() {
        for group in ComponentGroup::ALL {
            let json = serde_json::to_value(group).unwrap();
            assert_eq!(json, group.as_str());
        }
    }
}
