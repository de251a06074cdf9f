//! # Pick Station
//!
//! The station owns the [`OrderBook`] and the [`ItemSorterRobot`] and is the only code that
//! touches either. It is the "server" half of an actor: requests arrive on an `mpsc`
//! channel and are handled strictly one at a time, so a trigger that is busy picking an
//! order holds back every other request until the last unit has settled.
//!
//! ```text
//!   idle ──trigger──▶ processing ──all units picked / book empty / robot error──▶ idle
//! ```

use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use super::{
    PickProgress, ProcessOutcome, ProgressSender, StationClient, StationError, StationRequest,
};
use crate::model::OrderLine;
use crate::order_book::OrderBook;
use crate::robot::{CommandTransmitter, ItemSorterRobot};

pub struct PickStation<T: CommandTransmitter> {
    receiver: mpsc::Receiver<StationRequest>,
    book: OrderBook,
    robot: ItemSorterRobot<T>,
    settle_delay: Duration,
}

impl<T: CommandTransmitter> PickStation<T> {
    pub fn new(
        robot: ItemSorterRobot<T>,
        settle_delay: Duration,
        buffer_size: usize,
    ) -> (Self, StationClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let station = Self {
            receiver,
            book: OrderBook::new(),
            robot,
            settle_delay,
        };
        (station, StationClient::new(sender))
    }

    /// Runs the station's event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!(settle_delay_ms = self.settle_delay.as_millis() as u64, "Station started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StationRequest::AddOrder { order, respond_to } => {
                    self.book.add_order(order);
                    let _ = respond_to.send(Ok(()));
                }
                StationRequest::ProcessNextOrder {
                    progress,
                    respond_to,
                } => {
                    let result = self.process_next_order(progress.as_ref()).await;
                    if let Err(e) = &result {
                        warn!(error = %e, "Order aborted");
                    }
                    let _ = respond_to.send(result);
                }
                StationRequest::PendingOrders { respond_to } => {
                    let _ = respond_to.send(Ok(self.book.len()));
                }
            }
        }

        info!(pending = self.book.len(), "Shutdown");
    }

    #[instrument(skip(self, progress), fields(pending = self.book.len()))]
    async fn process_next_order(
        &mut self,
        progress: Option<&ProgressSender>,
    ) -> Result<ProcessOutcome, StationError> {
        let lines = self.book.process_next_order();
        if lines.is_empty() {
            info!("No pending orders");
            return Ok(ProcessOutcome::NoPendingOrders);
        }

        let mut units_picked = 0;
        for line in &lines {
            for unit in 1..=line.quantity() {
                self.pick_unit(line, unit, progress).await?;
                units_picked += 1;
            }
        }

        let value_cents = lines.iter().map(OrderLine::value_cents).sum();
        info!(units_picked, value_cents, "Order complete");
        Ok(ProcessOutcome::Completed {
            units_picked,
            value_cents,
        })
    }

    async fn pick_unit(
        &self,
        line: &OrderLine,
        unit: u32,
        progress: Option<&ProgressSender>,
    ) -> Result<(), StationError> {
        let item = line.item();
        let event = PickProgress {
            item: item.name.clone(),
            location: item.location,
            unit,
            quantity: line.quantity(),
        };
        debug!(unit, of = event.quantity, "{event}");
        if let Some(progress) = progress {
            // A listener that went away does not stop the order.
            let _ = progress.send(event);
        }
        self.robot.pick_up(item.location).await?;
        tokio::time::sleep(self.settle_delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RobotConfig;
    use crate::model::{InventoryLocation, Item, Order};
    use crate::robot::mock::MockTransmitter;
    use std::sync::Arc;

    fn line(name: &str, bin: u32, quantity: u32) -> OrderLine {
        let item = Arc::new(Item::new(name, 100, InventoryLocation::new(bin).unwrap()));
        OrderLine::new(item, quantity).unwrap()
    }

    fn station(mock: &MockTransmitter) -> PickStation<MockTransmitter> {
        let robot = ItemSorterRobot::new(mock.clone(), &RobotConfig::default());
        PickStation::new(robot, Duration::ZERO, 4).0
    }

    #[tokio::test]
    async fn test_process_picks_every_unit() {
        let mock = MockTransmitter::accept_all();
        let mut station = station(&mock);
        station.book.add_order(Order::now(vec![line("a", 1, 1), line("b", 3, 2)]));

        let outcome = station.process_next_order(None).await.unwrap();

        assert_eq!(
            outcome,
            ProcessOutcome::Completed { units_picked: 3, value_cents: 300 }
        );
        let scripts = mock.sent_to(30002);
        assert_eq!(scripts.len(), 3);
        assert!(scripts[0].contains("ITEM_X = 0.1\n"));
        assert!(scripts[1].contains("ITEM_X = 0.3\n"));
        assert!(scripts[2].contains("ITEM_X = 0.3\n"));
    }

    #[tokio::test]
    async fn test_robot_failure_abandons_rest_of_order() {
        let mock = MockTransmitter::new();
        mock.expect_send(29999).return_ok();
        mock.expect_send(30002).return_ok();
        mock.expect_send(29999).return_err("controller offline");

        let mut station = station(&mock);
        station.book.add_order(Order::now(vec![line("a", 2, 3)]));
        station.book.add_order(Order::now(vec![line("b", 1, 1)]));

        let err = station.process_next_order(None).await.unwrap_err();

        assert!(matches!(err, StationError::Robot(_)));
        assert_eq!(mock.sent_to(30002).len(), 1);
        // The failed order is gone, the next one is untouched.
        assert_eq!(station.book.len(), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn test_progress_is_reported_per_unit() {
        let mock = MockTransmitter::accept_all();
        let mut station = station(&mock);
        station.book.add_order(Order::now(vec![line("a", 1, 1), line("b", 3, 2)]));
        let (progress, mut events) = mpsc::unbounded_channel();

        station.process_next_order(Some(&progress)).await.unwrap();
        drop(progress);

        let mut seen = Vec::new();
        while let Some(event) = events.recv().await {
            seen.push((event.item, event.location.get(), event.unit, event.quantity));
        }
        assert_eq!(
            seen,
            [
                ("a".to_string(), 1, 1, 1),
                ("b".to_string(), 3, 1, 2),
                ("b".to_string(), 3, 2, 2),
            ]
        );
    }
}
