//! Immutable hero and item catalogs.
//!
//! A [`Catalog`] is constructed explicitly from parsed records and never
//! mutated afterwards, so it can be shared freely across concurrent
//! consumers. Serving layers spawn one fresh [`HeroState`] per
//! request/session from it.

use crate::attributes::PrimaryAttribute;
use crate::constants::{DEFAULT_HP_REGEN, DEFAULT_SPELL_RESISTANCE};
use crate::error::CatalogError;
use crate::hero::HeroState;
use crate::items::ItemModifier;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A hero catalog entry as shipped in static data.
///
/// Spell resistance and HP regen are optional in the data and default to
/// the values nearly every hero shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroRecord {
    pub name: String,
    #[serde(rename = "primary_attribute")]
    pub primary_attr: PrimaryAttribute,
    pub base_str: f64,
    pub str_gain: f64,
    pub base_agi: f64,
    pub agi_gain: f64,
    pub base_int: f64,
    pub int_gain: f64,
    pub damage_min: f64,
    pub damage_max: f64,
    pub armor: f64,
    pub speed: f64,
    pub bat: f64,
    #[serde(default = "default_spell_resistance")]
    pub spell_resistance: f64,
    #[serde(default = "default_hp_regen")]
    pub hp_regen: f64,
}

fn default_spell_resistance() -> f64 {
    DEFAULT_SPELL_RESISTANCE
}

fn default_hp_regen() -> f64 {
    DEFAULT_HP_REGEN
}

/// Read-only lookup over hero records and shared item modifiers.
#[derive(Debug, Clone)]
pub struct Catalog {
    heroes: Vec<HeroRecord>,
    items: Vec<Arc<ItemModifier>>,
}

impl Catalog {
    pub fn new(heroes: Vec<HeroRecord>, items: Vec<ItemModifier>) -> Self {
        Self {
            heroes,
            items: items.into_iter().map(Arc::new).collect(),
        }
    }

    /// Parses catalogs from their static-data formats: heroes as a JSON
    /// array, items as a YAML document stream (one document per item).
    /// Reading the files is the caller's concern.
    pub fn from_static_data(heroes_json: &str, items_yaml: &str) -> Result<Self, CatalogError> {
        let heroes: Vec<HeroRecord> = serde_json::from_str(heroes_json)?;

        let mut items = Vec::new();
        for document in serde_yaml::Deserializer::from_str(items_yaml) {
            items.push(ItemModifier::deserialize(document)?);
        }

        debug!(
            "loaded catalog: {} heroes, {} items",
            heroes.len(),
            items.len()
        );
        Ok(Self::new(heroes, items))
    }

    /// Looks up a hero record by name. Absence is an `Option`, never an
    /// error; callers check before use.
    pub fn hero(&self, name: &str) -> Option<&HeroRecord> {
        self.heroes.iter().find(|hero| hero.name == name)
    }

    /// Looks up an item by name.
    pub fn item(&self, name: &str) -> Option<&Arc<ItemModifier>> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Builds a fresh level-1 hero from the named record.
    pub fn spawn(&self, name: &str) -> Option<HeroState> {
        self.hero(name).map(HeroState::from_record)
    }

    pub fn hero_names(&self) -> Vec<&str> {
        self.heroes.iter().map(|hero| hero.name.as_str()).collect()
    }

    pub fn item_names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }
}
