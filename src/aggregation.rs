//! Aggregation policies for combining item stat contributions.
//!
//! Three distinct combinators reduce an inventory's contributions to one
//! stat into a single bonus. They are not interchangeable: each has its
//! own neutral element, and items that do not define the stat are
//! skipped rather than treated as contributing zero.

use crate::items::{ItemModifier, ItemStat};
use std::sync::Arc;

/// Additive stacking: the sum of the stat across all contributing items.
///
/// Used for attribute bonuses, health, mana, mana regen, armor, damage,
/// attack speed and movement-speed multipliers. No contributors sums
/// to 0.
pub fn sum_of(items: &[Arc<ItemModifier>], stat: ItemStat) -> f64 {
    items.iter().filter_map(|item| item.stat(stat)).sum()
}

/// Inverse-multiplicative stacking: `∏(1 - value)` across contributing
/// items.
///
/// Used for evasion and spell resistance, which stack as independent
/// probabilities; the result is the chance that none of the effects
/// trigger. No contributors multiply out to 1, the neutral element
/// ("no reduction").
pub fn stack_mul(items: &[Arc<ItemModifier>], stat: ItemStat) -> f64 {
    items
        .iter()
        .filter_map(|item| item.stat(stat))
        .map(|value| 1.0 - value)
        .product()
}

/// Best-of stacking: only the single highest contribution applies.
///
/// Used for flat movement speed, where boots-type items do not stack.
/// An empty inventory and an inventory with no contributing item both
/// yield 0; a contributing item always wins, even with a negative
/// value.
pub fn max_of(items: &[Arc<ItemModifier>], stat: ItemStat) -> f64 {
    items
        .iter()
        .filter_map(|item| item.stat(stat))
        .reduce(f64::max)
        .unwrap_or(0.0)
}
