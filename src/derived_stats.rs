//! Flat derived-stat snapshots for serving layers.

use crate::catalog::Catalog;
use crate::error::CalcError;
use crate::hero::HeroState;
use log::warn;
use serde::Serialize;
use std::sync::Arc;

/// Every derived stat of a hero in one flat, serializable record.
///
/// `crit_chance` is intentionally omitted until the engine implements
/// it; see [`HeroState::crit_chance`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedStats {
    pub hp: f64,
    pub mana: f64,
    pub mana_regen: f64,
    pub damage: f64,
    pub armor: f64,
    pub movement_speed: f64,
    pub attack_speed: f64,
    pub attacks_per_second: f64,
    pub spell_resistance: f64,
    pub evasion: f64,
}

impl DerivedStats {
    /// Snapshots all derived stats of a hero's current state.
    pub fn from_hero(hero: &HeroState) -> Self {
        Self {
            hp: hero.hp(),
            mana: hero.mana(),
            mana_regen: hero.mana_regen(),
            damage: hero.damage(),
            armor: hero.armor(),
            movement_speed: hero.movement_speed(),
            attack_speed: hero.attack_speed(),
            attacks_per_second: hero.attacks_per_second(),
            spell_resistance: hero.spell_resistance(),
            evasion: hero.evasion(),
        }
    }
}

/// Computes all derived stats for hero `hero_name` at `level` carrying
/// `item_names` — the single engine entry point a serving layer needs.
///
/// Unknown hero or item names are lookup failures the caller reported
/// bad input for; an over-full item set surfaces the recoverable
/// inventory condition.
pub fn calculate(
    catalog: &Catalog,
    hero_name: &str,
    level: u32,
    item_names: &[&str],
) -> Result<DerivedStats, CalcError> {
    let mut hero = catalog.spawn(hero_name).ok_or_else(|| {
        warn!("calculate: unknown hero `{hero_name}`");
        CalcError::HeroNotFound(hero_name.to_string())
    })?;
    hero.set_level(level);

    for name in item_names {
        let item = catalog.item(name).ok_or_else(|| {
            warn!("calculate: unknown item `{name}`");
            CalcError::ItemNotFound(name.to_string())
        })?;
        hero.give(Arc::clone(item))?;
    }

    Ok(DerivedStats::from_hero(&hero))
}
