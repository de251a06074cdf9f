use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use super::{ProcessOutcome, ProgressSender, StationError, StationRequest};
use crate::model::Order;

/// Type-safe handle to a running [`PickStation`](crate::station::PickStation).
///
/// Holds only a sender, so cloning is cheap. The station stops once every clone is dropped.
#[derive(Clone)]
pub struct StationClient {
    sender: mpsc::Sender<StationRequest>,
}

impl StationClient {
    pub fn new(sender: mpsc::Sender<StationRequest>) -> Self {
        Self { sender }
    }

    /// Appends an order to the tail of the station's book.
    #[instrument(skip(self, order), fields(lines = order.lines.len()))]
    pub async fn add_order(&self, order: Order) -> Result<(), StationError> {
        debug!(?order, "add_order called");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StationRequest::AddOrder { order, respond_to })
            .await
            .map_err(|_| StationError::ActorClosed)?;
        response.await.map_err(|_| StationError::ActorDropped)?
    }

    /// Triggers the station: picks every unit of the next order, or reports that there
    /// is none. Resolves only after the last unit has settled.
    #[instrument(skip(self))]
    pub async fn process_next_order(&self) -> Result<ProcessOutcome, StationError> {
        self.trigger(None).await
    }

    /// Same as [`process_next_order`](Self::process_next_order), but every unit is
    /// announced on `progress` before the robot moves. The station drops its end of the
    /// channel when the trigger finishes.
    #[instrument(skip(self, progress))]
    pub async fn process_next_order_with_progress(
        &self,
        progress: ProgressSender,
    ) -> Result<ProcessOutcome, StationError> {
        self.trigger(Some(progress)).await
    }

    async fn trigger(
        &self,
        progress: Option<ProgressSender>,
    ) -> Result<ProcessOutcome, StationError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StationRequest::ProcessNextOrder {
                progress,
                respond_to,
            })
            .await
            .map_err(|_| StationError::ActorClosed)?;
        response.await.map_err(|_| StationError::ActorDropped)?
    }

    pub async fn pending_orders(&self) -> Result<usize, StationError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StationRequest::PendingOrders { respond_to })
            .await
            .map_err(|_| StationError::ActorClosed)?;
        response.await.map_err(|_| StationError::ActorDropped)?
    }
}
