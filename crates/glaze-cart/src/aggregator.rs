//! Pure cart arithmetic.
//!
//! Totals are integer sums over active items, so they do not depend on item
//! order and repeated runs give identical results.

use chrono::{DateTime, Utc};
use glaze_pricing::breakdown::ComponentGroup;
use glaze_pricing::Money;

use crate::error::CartError;
use crate::ids::LineItemId;
use crate::line_item::{CartLineItem, ConfigurationKey, MAX_QUANTITY_PER_ITEM};
use crate::totals::CartTotals;

/// Fold all active items into cart totals.
pub fn compute_totals(items: &[CartLineItem]) -> Result<CartTotals, CartError> {
    let mut totals = CartTotals::zero();

    for item in items.iter().filter(|i| i.active) {
        let quantity = i64::from(item.quantity);

        totals.grand_total = checked_add(totals.grand_total, item.line_total()?)?;
        totals.total_items += u64::from(item.quantity);

        for (component, cost) in &item.breakdown.components {
            let slot = totals.group_mut(component.group());
            *slot = checked_add(*slot, checked_mul(*cost, quantity)?)?;
        }
        let slot = totals.group_mut(ComponentGroup::Installation);
        *slot = checked_add(*slot, checked_mul(item.breakdown.installation, quantity)?)?;
    }

    Ok(totals)
}

/// Mark every active item inactive. Returns the (zero) totals.
pub fn clear(items: &mut [CartLineItem], now: DateTime<Utc>) -> CartTotals {
    for item in items.iter_mut().filter(|i| i.active) {
        item.active = false;
        item.updated_at = now;
    }
    CartTotals::zero()
}

/// The active item with exactly this configuration, if any.
pub fn find_mergeable<'a>(
    items: &'a [CartLineItem],
    key: &ConfigurationKey,
) -> Option<&'a CartLineItem> {
    items
        .iter()
        .find(|i| i.active && i.configuration_key() == *key)
}

/// Quantity of `existing` after merging `added` more units.
pub fn merged_quantity(existing: &CartLineItem, added: u32) -> Result<u32, CartError> {
    let quantity = existing
        .quantity
        .checked_add(added)
        .ok_or(CartError::Overflow)?;
    if quantity > MAX_QUANTITY_PER_ITEM {
        return Err(CartError::InvalidQuantity(i64::from(quantity)));
    }
    Ok(quantity)
}

/// Merge a new item into a matching active one, or push it.
///
/// A merge keeps the existing unit price. Returns the ID of the item that
/// holds the units.
pub fn add_or_merge(
    items: &mut Vec<CartLineItem>,
    new_item: CartLineItem,
) -> Result<LineItemId, CartError> {
    let key = new_item.configuration_key();

    if let Some(existing) = items
        .iter_mut()
        .find(|i| i.active && i.configuration_key() == key)
    {
        existing.quantity = merged_quantity(existing, new_item.quantity)?;
        existing.updated_at = new_item.updated_at;
        return Ok(existing.id.clone());
    }

    let id = new_item.id.clone();
    items.push(new_item);
    Ok(id)
}

fn checked_add(a: Money, b: Money) -> Result<Money, CartError> {
    a.try_add(&b).ok_or(CartError::Overflow)
}

fn checked_mul(a: Money, factor: i64) -> Result<Money, CartError> {
    a.try_multiply(factor).ok_or(CartError::Overflow)
}
