use serde::{Deserialize, Serialize};

/// The per-item stat contributions the engine recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStat {
    Strength,
    Agility,
    Intelligence,
    Health,
    Mana,
    ManaRegen,
    ManaRegenRaw,
    Armor,
    Damage,
    AttackSpeed,
    Evasion,
    SpellResistance,
    MovementSpeed,
    MovementSpeedMultiplier,
}

/// An immutable named bundle of optional stat contributions.
///
/// Each field an item leaves out means "no contribution from this item",
/// which is not the same as contributing zero: the multiplicative and
/// max aggregation policies have neutral elements other than 0, so
/// absent fields must be skipped, never defaulted.
///
/// Items are built once from catalog data and shared read-only between
/// the catalog and any number of hero inventories.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemModifier {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agility: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_regen: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_regen_raw: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evasion: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spell_resistance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement_speed_multiplier: Option<f64>,
}

impl ItemModifier {
    /// Returns this item's contribution to `stat`, or `None` if the item
    /// does not define it.
    pub fn stat(&self, stat: ItemStat) -> Option<f64> {
        match stat {
            ItemStat::Strength => self.strength,
            ItemStat::Agility => self.agility,
            ItemStat::Intelligence => self.intelligence,
            ItemStat::Health => self.health,
            ItemStat::Mana => self.mana,
            ItemStat::ManaRegen => self.mana_regen,
            ItemStat::ManaRegenRaw => self.mana_regen_raw,
            ItemStat::Armor => self.armor,
            ItemStat::Damage => self.damage,
            ItemStat::AttackSpeed => self.attack_speed,
            ItemStat::Evasion => self.evasion,
            ItemStat::SpellResistance => self.spell_resistance,
            ItemStat::MovementSpeed => self.movement_speed,
            ItemStat::MovementSpeedMultiplier => self.movement_speed_multiplier,
        }
    }

    /// True if the item defines `stat` at all.
    pub fn defines(&self, stat: ItemStat) -> bool {
        self.stat(stat).is_some()
    }
}
