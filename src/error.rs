//! Engine error types.

use thiserror::Error;

/// Recoverable inventory conditions. A failed operation leaves the
/// inventory untouched; the caller decides how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("inventory is full ({capacity} slots)")]
    Full { capacity: usize },
}

/// A derived-stat query the engine does not support yet. Distinct from
/// a valid zero result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatError {
    #[error("stat `{stat}` is not implemented")]
    Unsupported { stat: &'static str },
}

/// Failures of the compute-all operation over a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("hero `{0}` not found in catalog")]
    HeroNotFound(String),
    #[error("item `{0}` not found in catalog")]
    ItemNotFound(String),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// Failures while parsing static catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse hero catalog: {0}")]
    HeroParse(#[from] serde_json::Error),
    #[error("failed to parse item catalog: {0}")]
    ItemParse(#[from] serde_yaml::Error),
}
