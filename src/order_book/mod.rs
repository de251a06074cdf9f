//! First-in-first-out queue of pending orders.

use std::collections::VecDeque;
use tracing::debug;

use crate::model::{Order, OrderLine};

/// Pending orders in strict arrival order.
///
/// The book is owned by exactly one [`PickStation`](crate::station::PickStation), which
/// processes requests one at a time, so no locking is involved.
#[derive(Debug, Default)]
pub struct OrderBook {
    orders: VecDeque<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an order to the tail of the queue. Always succeeds.
    pub fn add_order(&mut self, order: Order) {
        self.orders.push_back(order);
        debug!(pending = self.orders.len(), "Order queued");
    }

    /// Removes the head order and returns its lines in their original order.
    ///
    /// An empty book yields an empty `Vec`. Callers cannot tell that apart from an
    /// order that had no lines, and both are handled the same way.
    pub fn process_next_order(&mut self) -> Vec<OrderLine> {
        self.orders
            .pop_front()
            .map(|order| order.lines)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InventoryLocation, Item};
    use std::sync::Arc;

    fn order_of(names: &[&str]) -> Order {
        let lines = names
            .iter()
            .map(|name| {
                let item = Arc::new(Item::new(*name, 100, InventoryLocation::new(1).unwrap()));
                OrderLine::new(item, 1).unwrap()
            })
            .collect();
        Order::now(lines)
    }

    fn names(lines: &[OrderLine]) -> Vec<String> {
        lines.iter().map(|line| line.item().name.clone()).collect()
    }

    #[test]
    fn test_orders_come_out_in_arrival_order() {
        let mut book = OrderBook::new();
        book.add_order(order_of(&["a1", "a2"]));
        book.add_order(order_of(&["b1"]));
        book.add_order(order_of(&["c1", "c2", "c3"]));
        assert_eq!(book.len(), 3);

        assert_eq!(names(&book.process_next_order()), ["a1", "a2"]);
        assert_eq!(names(&book.process_next_order()), ["b1"]);
        assert_eq!(names(&book.process_next_order()), ["c1", "c2", "c3"]);
        assert!(book.is_empty());
    }

    #[test]
    fn test_empty_book_returns_no_lines() {
        let mut book = OrderBook::new();
        assert!(book.process_next_order().is_empty());
    }

    #[test]
    fn test_single_order_is_consumed_once() {
        let mut book = OrderBook::new();
        book.add_order(order_of(&["only"]));

        assert_eq!(names(&book.process_next_order()), ["only"]);
        assert!(book.process_next_order().is_empty());
    }

    #[test]
    fn test_order_without_lines_looks_like_empty_book() {
        let mut book = OrderBook::new();
        book.add_order(Order::now(Vec::new()));

        assert!(book.process_next_order().is_empty());
        assert!(book.is_empty());
    }
}
