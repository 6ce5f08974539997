use serde::{Deserialize, Serialize};

/// The attribute whose *gained* value feeds a hero's right-click damage.
///
/// Catalog data spells these `"STR"`, `"AGI"` and `"INT"`; anything else
/// is rejected when the hero record is parsed, so downstream code can
/// match exhaustively.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PrimaryAttribute {
    #[serde(rename = "STR")]
    Strength,
    #[serde(rename = "AGI")]
    Agility,
    #[serde(rename = "INT")]
    Intelligence,
}

impl PrimaryAttribute {
    pub fn all() -> [PrimaryAttribute; 3] {
        [
            PrimaryAttribute::Strength,
            PrimaryAttribute::Agility,
            PrimaryAttribute::Intelligence,
        ]
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            PrimaryAttribute::Strength => "STR",
            PrimaryAttribute::Agility => "AGI",
            PrimaryAttribute::Intelligence => "INT",
        }
    }
}
