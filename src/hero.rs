//! Hero state and derived-stat queries.
//!
//! A [`HeroState`] owns base stats from the catalog, the level/attribute
//! progression, and a capacity-bounded inventory of shared
//! [`ItemModifier`]s. Every derived-stat query is a pure function of the
//! current state, recomputed on each call; state is small and the
//! formulas are cheap, so nothing is cached.

use crate::aggregation::{max_of, stack_mul, sum_of};
use crate::attributes::PrimaryAttribute;
use crate::catalog::HeroRecord;
use crate::constants::{
    ARMOR_PER_AGILITY, ATTR_POINTS_PER_LEVEL, BASE_HP, EHP_PER_ARMOR, HP_PER_STRENGTH, IAS_CAP,
    INVENTORY_CAPACITY, MANA_PER_INTELLIGENCE, MANA_REGEN_PER_INTELLIGENCE, MOVEMENT_SPEED_CAP,
};
use crate::error::{InventoryError, StatError};
use crate::items::{ItemModifier, ItemStat};
use crate::progression::Progression;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct HeroState {
    name: String,
    primary_attr: PrimaryAttribute,
    base_str: f64,
    str_gain: f64,
    base_agi: f64,
    agi_gain: f64,
    base_int: f64,
    int_gain: f64,
    base_damage: f64,
    base_armor: f64,
    base_speed: f64,
    bat: f64,
    base_spell_resistance: f64,
    hp_regen: f64,
    progression: Progression,
    items: Vec<Arc<ItemModifier>>,
}

impl HeroState {
    /// Builds a fresh level-1 hero with an empty inventory from a
    /// catalog record. Base damage is the floored midpoint of the
    /// record's damage range.
    pub fn from_record(record: &HeroRecord) -> Self {
        Self {
            name: record.name.clone(),
            primary_attr: record.primary_attr,
            base_str: record.base_str,
            str_gain: record.str_gain,
            base_agi: record.base_agi,
            agi_gain: record.agi_gain,
            base_int: record.base_int,
            int_gain: record.int_gain,
            base_damage: ((record.damage_min + record.damage_max) / 2.0).floor(),
            base_armor: record.armor,
            base_speed: record.speed,
            bat: record.bat,
            base_spell_resistance: record.spell_resistance,
            hp_regen: record.hp_regen,
            progression: Progression::new(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_attr(&self) -> PrimaryAttribute {
        self.primary_attr
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn attr_levels(&self) -> u32 {
        self.progression.attr_levels()
    }

    /// Base HP regeneration from the catalog. Not consumed by any
    /// derived stat yet.
    pub fn hp_regen(&self) -> f64 {
        self.hp_regen
    }

    /// Sets the level; attribute points reset to the minimum legal
    /// allocation for it.
    pub fn set_level(&mut self, level: u32) {
        self.progression.set_level(level);
    }

    /// Allocates skill points to raw attributes, clamped into the legal
    /// range for the current level.
    pub fn set_attr_levels(&mut self, attr_levels: u32) {
        self.progression.set_attr_levels(attr_levels);
    }

    // === Attribute queries ===

    fn gained(&self, gain: f64, stat: ItemStat) -> f64 {
        (self.level() - 1) as f64 * gain
            + self.attr_levels() as f64 * ATTR_POINTS_PER_LEVEL
            + sum_of(&self.items, stat)
    }

    /// Strength gained from levels, attribute points and items.
    pub fn gained_str(&self) -> f64 {
        self.gained(self.str_gain, ItemStat::Strength)
    }

    pub fn total_str(&self) -> f64 {
        self.base_str + self.gained_str()
    }

    /// Agility gained from levels, attribute points and items.
    pub fn gained_agi(&self) -> f64 {
        self.gained(self.agi_gain, ItemStat::Agility)
    }

    pub fn total_agi(&self) -> f64 {
        self.base_agi + self.gained_agi()
    }

    /// Intelligence gained from levels, attribute points and items.
    pub fn gained_int(&self) -> f64 {
        self.gained(self.int_gain, ItemStat::Intelligence)
    }

    pub fn total_int(&self) -> f64 {
        self.base_int + self.gained_int()
    }

    // === Derived stats ===

    /// Right-click damage: base damage plus the gained value of the
    /// hero's primary attribute plus flat item damage, floored.
    pub fn damage(&self) -> f64 {
        let gained_primary = match self.primary_attr {
            PrimaryAttribute::Strength => self.gained_str(),
            PrimaryAttribute::Agility => self.gained_agi(),
            PrimaryAttribute::Intelligence => self.gained_int(),
        };
        (self.base_damage + gained_primary + sum_of(&self.items, ItemStat::Damage)).floor()
    }

    /// Total HP from strength and flat item health.
    pub fn hp(&self) -> f64 {
        BASE_HP + self.total_str().floor() * HP_PER_STRENGTH + sum_of(&self.items, ItemStat::Health)
    }

    /// Total mana from intelligence and flat item mana.
    pub fn mana(&self) -> f64 {
        self.total_int().floor() * MANA_PER_INTELLIGENCE + sum_of(&self.items, ItemStat::Mana)
    }

    /// Mana regeneration: raw regen from intelligence and flat item
    /// regen, scaled by the item regen multiplier.
    pub fn mana_regen(&self) -> f64 {
        let raw = self.total_int() * MANA_REGEN_PER_INTELLIGENCE
            + sum_of(&self.items, ItemStat::ManaRegenRaw);
        raw * (1.0 + sum_of(&self.items, ItemStat::ManaRegen))
    }

    /// Armor from gained agility and item bonuses. Gained agility, not
    /// total: base agility is excluded from the armor formula.
    pub fn armor(&self) -> f64 {
        self.base_armor + self.gained_agi() * ARMOR_PER_AGILITY + sum_of(&self.items, ItemStat::Armor)
    }

    /// Effective HP: how much physical damage the hero can absorb given
    /// its armor.
    pub fn ehp(&self) -> f64 {
        self.hp() * (self.armor() * EHP_PER_ARMOR + 1.0)
    }

    /// Movement speed: base speed plus the single best flat bonus,
    /// scaled by stacked percentage bonuses, hard-capped at 522.
    pub fn movement_speed(&self) -> f64 {
        let flat = self.base_speed + max_of(&self.items, ItemStat::MovementSpeed);
        let multiplier = 1.0 + sum_of(&self.items, ItemStat::MovementSpeedMultiplier);
        (flat * multiplier).min(MOVEMENT_SPEED_CAP)
    }

    /// Increased attack speed points from agility and items, hard-capped
    /// at 400.
    pub fn ias(&self) -> f64 {
        (self.total_agi().floor() + sum_of(&self.items, ItemStat::AttackSpeed)).min(IAS_CAP)
    }

    /// Seconds per autoattack.
    pub fn attack_speed(&self) -> f64 {
        self.bat / (1.0 + self.ias() / 100.0)
    }

    pub fn attacks_per_second(&self) -> f64 {
        (1.0 + self.ias() / 100.0) / self.bat
    }

    /// Spell resistance from the base value and multiplicatively stacked
    /// item resistances.
    pub fn spell_resistance(&self) -> f64 {
        1.0 - (1.0 - self.base_spell_resistance) * stack_mul(&self.items, ItemStat::SpellResistance)
    }

    /// Evasion from multiplicatively stacked item sources.
    pub fn evasion(&self) -> f64 {
        1.0 - stack_mul(&self.items, ItemStat::Evasion)
    }

    /// Chance to crit. Not implemented; always surfaces as unsupported
    /// so callers can tell it apart from a real zero.
    pub fn crit_chance(&self) -> Result<f64, StatError> {
        Err(StatError::Unsupported {
            stat: "crit_chance",
        })
    }

    // === Inventory management ===

    /// Appends an item to the inventory. Fails without mutating anything
    /// once all six slots are taken.
    pub fn give(&mut self, item: Arc<ItemModifier>) -> Result<(), InventoryError> {
        if self.items.len() >= INVENTORY_CAPACITY {
            return Err(InventoryError::Full {
                capacity: INVENTORY_CAPACITY,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Names of carried items, in insertion order.
    pub fn inventory(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    /// Empties the inventory; subsequent queries behave as if the hero
    /// carries nothing.
    pub fn clear_inventory(&mut self) {
        self.items.clear();
    }
}
