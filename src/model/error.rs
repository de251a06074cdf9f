//! Error types for building catalog items and orders.

use thiserror::Error;

/// Errors raised while constructing model values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// The inventory location is outside the physical bins `1..=3`.
    #[error("Invalid inventory location: {0} (expected 1..={max})", max = crate::model::InventoryLocation::MAX)]
    InvalidLocation(u32),

    /// Order lines must request at least one unit.
    #[error("Invalid quantity {quantity} for item {item}")]
    InvalidQuantity { item: String, quantity: u32 },

    /// The catalog has no item with this name.
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// An item with the same name is already registered.
    #[error("Item already exists: {0}")]
    DuplicateItem(String),
}
