//! Herocalc - Hero Stat-Aggregation Engine
//!
//! Computes derived combat statistics (HP, mana, armor, damage, attack
//! speed, movement speed, spell resistance, evasion) for a hero given
//! its base attributes, level, attribute-point allocation, and equipped
//! items.
//!
//! Serving layers build a [`Catalog`] from parsed catalog data, spawn a
//! [`HeroState`] per request, mutate level and inventory, and either
//! query stats individually or take a [`DerivedStats`] snapshot via
//! [`derived_stats::calculate`]. HTTP, templates and file reading are
//! the callers' concern; the engine itself performs no I/O.

pub mod aggregation;
pub mod attributes;
pub mod catalog;
pub mod constants;
pub mod derived_stats;
pub mod error;
pub mod hero;
pub mod items;
pub mod progression;

pub use catalog::{Catalog, HeroRecord};
pub use derived_stats::DerivedStats;
pub use hero::HeroState;
pub use items::{ItemModifier, ItemStat};
