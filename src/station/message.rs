//! Requests understood by the [`PickStation`](crate::station::PickStation).

use std::fmt;
use tokio::sync::{mpsc, oneshot};

use super::StationError;
use crate::model::{InventoryLocation, Order};

/// Type alias for the one-shot response channel used by the station.
pub type Response<T> = oneshot::Sender<Result<T, StationError>>;

/// What happened when the station was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The book was empty (or the head order had no lines). Nothing moved.
    NoPendingOrders,
    /// Every unit of the head order was picked.
    Completed {
        units_picked: u32,
        /// Informational order value in cents.
        value_cents: u64,
    },
}

/// Emitted just before the robot is sent to fetch one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickProgress {
    pub item: String,
    pub location: InventoryLocation,
    /// 1-based unit number within the order line.
    pub unit: u32,
    pub quantity: u32,
}

impl fmt::Display for PickProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Picking up {} from box {}…", self.item, self.location)
    }
}

/// Where a trigger reports per-unit progress, if anyone is listening.
pub type ProgressSender = mpsc::UnboundedSender<PickProgress>;

/// Internal message type sent to the station.
#[derive(Debug)]
pub enum StationRequest {
    AddOrder {
        order: Order,
        respond_to: Response<()>,
    },
    ProcessNextOrder {
        progress: Option<ProgressSender>,
        respond_to: Response<ProcessOutcome>,
    },
    PendingOrders {
        respond_to: Response<usize>,
    },
}
