//! Derived cart totals.

use glaze_pricing::breakdown::ComponentGroup;
use glaze_pricing::Money;
use serde::{Deserialize, Serialize};

/// Totals over the active items of a cart. Never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Σ unit price × quantity.
    pub grand_total: Money,
    /// Σ quantity.
    pub total_items: u64,
    pub aluminium_framing: Money,
    pub rubber: Money,
    pub wool_file: Money,
    pub rollers: Money,
    pub lock: Money,
    pub guiders: Money,
    pub side_arms: Money,
    pub project_handle: Money,
    pub glass: Money,
    pub installation: Money,
}

impl CartTotals {
    /// Totals of an empty cart.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Check if the cart holds nothing.
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// The running sum for one group.
    pub fn group(&self, group: ComponentGroup) -> Money {
        match group {
            ComponentGroup::AluminiumFraming => self.aluminium_framing,
            ComponentGroup::Rubber => self.rubber,
            ComponentGroup::WoolFile => self.wool_file,
            ComponentGroup::Rollers => self.rollers,
            ComponentGroup::Lock => self.lock,
            ComponentGroup::Guiders => self.guiders,
            ComponentGroup::SideArms => self.side_arms,
            ComponentGroup::ProjectHandle => self.project_handle,
            ComponentGroup::Glass => self.glass,
            ComponentGroup::Installation => self.installation,
        }
    }

    pub(crate) fn group_mut(&mut self, group: ComponentGroup) -> &mut Money {
        match group {
            ComponentGroup::AluminiumFraming => &mut self.aluminium_framing,
            ComponentGroup::Rubber => &mut self.rubber,
            ComponentGroup::WoolFile => &mut self.wool_file,
            ComponentGroup::Rollers => &mut self.rollers,
            ComponentGroup::Lock => &mut self.lock,
            ComponentGroup::Guiders => &mut self.guiders,
            ComponentGroup::SideArms => &mut self.side_arms,
            ComponentGroup::ProjectHandle => &mut self.project_handle,
            ComponentGroup::Glass => &mut self.glass,
            ComponentGroup::Installation => &mut self.installation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let totals = CartTotals::zero();
        assert!(totals.is_empty());
        assert!(ComponentGroup::ALL
            .iter()
            .all(|g| totals.group(*g).is_zero()));
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(CartTotals::zero()).unwrap();
        for key in [
            "grandTotal",
            "totalItems",
            "aluminiumFraming",
            "woolFile",
            "sideArms",
            "projectHandle",
            "installation",
        ] {
            assert!(json.get(key).is_some(), "{key}");
        }
    }
}
