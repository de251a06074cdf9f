//! Demo data. Orders are not persisted, so every start begins from this same set.

use chrono::{Duration, Utc};

use crate::model::{Catalog, InventoryLocation, Item, ModelError, Order, OrderLine};

/// Three items, one per bin.
pub fn sample_catalog() -> Result<Catalog, ModelError> {
    let mut catalog = Catalog::new();
    catalog.insert(Item::new("M3 screw", 100, InventoryLocation::new(1)?))?;
    catalog.insert(Item::new("M3 nut", 150, InventoryLocation::new(2)?))?;
    catalog.insert(Item::new("pen", 100, InventoryLocation::new(3)?))?;
    Ok(catalog)
}

/// Two orders: a four-unit order from two days ago, then a single nut placed just now.
pub fn sample_orders(catalog: &Catalog) -> Result<Vec<Order>, ModelError> {
    let screw = catalog.get("M3 screw")?;
    let nut = catalog.get("M3 nut")?;
    let pen = catalog.get("pen")?;

    let now = Utc::now();
    let older = Order::new(
        vec![
            OrderLine::new(screw, 1)?,
            OrderLine::new(nut.clone(), 2)?,
            OrderLine::new(pen, 1)?,
        ],
        now - Duration::days(2),
    );
    let newer = Order::new(vec![OrderLine::new(nut, 1)?], now);

    Ok(vec![older, newer])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_orders() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.len(), 3);

        let orders = sample_orders(&catalog).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].unit_count(), 4);
        assert_eq!(orders[1].unit_count(), 1);
        assert!(orders[0].created_at < orders[1].created_at);

        let bins: Vec<u32> = orders[0]
            .lines
            .iter()
            .map(|line| line.item().location.get())
            .collect();
        assert_eq!(bins, [1, 2, 3]);
    }
}
