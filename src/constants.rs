// Inventory constants
pub const INVENTORY_CAPACITY: usize = 6;

// Progression constants
pub const ATTR_POINTS_PER_LEVEL: f64 = 2.0;
pub const MAX_ATTR_LEVELS: u32 = 10;
pub const FORCED_ATTR_LEVEL: u32 = 15;

// Derived stat formula constants
pub const BASE_HP: f64 = 150.0;
pub const HP_PER_STRENGTH: f64 = 19.0;
pub const MANA_PER_INTELLIGENCE: f64 = 13.0;
pub const MANA_REGEN_PER_INTELLIGENCE: f64 = 0.04;
pub const ARMOR_PER_AGILITY: f64 = 0.14;
pub const EHP_PER_ARMOR: f64 = 0.06;

// Hard caps
pub const MOVEMENT_SPEED_CAP: f64 = 522.0;
pub const IAS_CAP: f64 = 400.0;

// Catalog defaults
pub const DEFAULT_SPELL_RESISTANCE: f64 = 0.25;
pub const DEFAULT_HP_REGEN: f64 = 0.25;
