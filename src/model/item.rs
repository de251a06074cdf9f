use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::ModelError;

/// A physical storage bin the robot can reach.
///
/// Bins are numbered `1..=3` and sit on a line 0.1 m apart, so the bin number
/// maps directly onto the X coordinate of the grasp position. Out-of-range
/// numbers are rejected here so a pick can never target a point outside the
/// calibrated workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct InventoryLocation(u32);

impl InventoryLocation {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 3;

    /// Spacing between neighbouring bins, in metres.
    pub const BIN_SPACING_M: f64 = 0.1;

    pub fn new(bin: u32) -> Result<Self, ModelError> {
        if (Self::MIN..=Self::MAX).contains(&bin) {
            Ok(Self(bin))
        } else {
            Err(ModelError::InvalidLocation(bin))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// X coordinate of the bin in the robot base frame, in metres.
    pub fn x_coordinate(self) -> f64 {
        f64::from(self.0) * Self::BIN_SPACING_M
    }
}

impl TryFrom<u32> for InventoryLocation {
    type Error = ModelError;

    fn try_from(bin: u32) -> Result<Self, Self::Error> {
        Self::new(bin)
    }
}

impl From<InventoryLocation> for u32 {
    fn from(location: InventoryLocation) -> Self {
        location.0
    }
}

impl fmt::Display for InventoryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stocked article. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Unit price in cents. Informational only; nothing is billed.
    pub price_cents: u64,
    pub location: InventoryLocation,
}

impl Item {
    pub fn new(name: impl Into<String>, price_cents: u64, location: InventoryLocation) -> Self {
        Self {
            name: name.into(),
            price_cents,
            location,
        }
    }
}

/// Central owner of all [`Item`]s, keyed by name.
///
/// Order lines never copy an item; they hold the `Arc` handed out by [`Catalog::get`],
/// so the same item can appear in many orders.
#[derive(Debug, Default)]
pub struct Catalog {
    items: HashMap<String, Arc<Item>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an item and returns the shared handle to it.
    pub fn insert(&mut self, item: Item) -> Result<Arc<Item>, ModelError> {
        if self.items.contains_key(&item.name) {
            return Err(ModelError::DuplicateItem(item.name));
        }
        let item = Arc::new(item);
        self.items.insert(item.name.clone(), Arc::clone(&item));
        Ok(item)
    }

    pub fn get(&self, name: &str) -> Result<Arc<Item>, ModelError> {
        self.items
            .get(name)
            .cloned()
            .ok_or_else(|| ModelError::UnknownItem(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_bounds() {
        assert!(InventoryLocation::new(1).is_ok());
        assert!(InventoryLocation::new(3).is_ok());
        assert_eq!(InventoryLocation::new(0), Err(ModelError::InvalidLocation(0)));
        assert_eq!(InventoryLocation::new(4), Err(ModelError::InvalidLocation(4)));
    }

    #[test]
    fn test_location_maps_to_bin_spacing() {
        let x = InventoryLocation::new(2).unwrap().x_coordinate();
        assert!((x - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_catalog_shares_items() {
        let mut catalog = Catalog::new();
        let nut = catalog
            .insert(Item::new("M3 nut", 150, InventoryLocation::new(2).unwrap()))
            .unwrap();

        let again = catalog.get("M3 nut").unwrap();
        assert!(Arc::ptr_eq(&nut, &again));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_catalog_rejects_duplicates_and_unknown_names() {
        let mut catalog = Catalog::new();
        let pen = Item::new("pen", 100, InventoryLocation::new(3).unwrap());
        catalog.insert(pen.clone()).unwrap();

        assert_eq!(catalog.insert(pen), Err(ModelError::DuplicateItem("pen".into())));
        assert_eq!(catalog.get("stapler"), Err(ModelError::UnknownItem("stapler".into())));
    }
    #[test]
    fn test_deserialized_location_is_validated() {
        use serde::de::value::Error as ValueError;
        use serde::de::IntoDeserializer;

        let from = |bin: u32| {
            InventoryLocation::deserialize(IntoDeserializer::<ValueError>::into_deserializer(bin))
        };

        assert_eq!(from(2).unwrap(), InventoryLocation::new(2).unwrap());
        assert!(from(0).is_err());
        let err = from(4).unwrap_err();
        assert!(err.to_string().contains("Invalid inventory location: 4"), "{err}");
    }
}
