use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::{Item, ModelError};

/// One line of an order: an item from the catalog and how many units to pick.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    item: Arc<Item>,
    quantity: u32,
}

impl OrderLine {
    pub fn new(item: Arc<Item>, quantity: u32) -> Result<Self, ModelError> {
        if quantity == 0 {
            return Err(ModelError::InvalidQuantity {
                item: item.name.clone(),
                quantity,
            });
        }
        Ok(Self { item, quantity })
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Informational line value in cents.
    pub fn value_cents(&self) -> u64 {
        self.item.price_cents * u64::from(self.quantity)
    }
}

/// A customer order waiting to be picked.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub lines: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(lines: Vec<OrderLine>, created_at: DateTime<Utc>) -> Self {
        Self { lines, created_at }
    }

    /// Creates an order stamped with the current time.
    pub fn now(lines: Vec<OrderLine>) -> Self {
        Self::new(lines, Utc::now())
    }

    /// Total number of units across all lines.
    pub fn unit_count(&self) -> u32 {
        self.lines.iter().map(OrderLine::quantity).sum()
    }
}
