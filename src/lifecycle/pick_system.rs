use tracing::{debug, error, info};

use crate::config::StationConfig;
use crate::model::Order;
use crate::robot::{CommandTransmitter, ItemSorterRobot, TcpTransmitter};
use crate::station::{PickStation, StationClient, StationError};

/// The runtime wrapper around a running [`PickStation`].
///
/// `PickSystem` is responsible for:
/// - **Wiring**: composing the robot over its transmitter and handing it to the station
/// - **Lifecycle**: spawning the station task and shutting it down again
///
/// # Example
///
/// ```ignore
/// let system = PickSystem::new(&StationConfig::from_env()?);
/// system.seed(sample_orders(&sample_catalog()?)?).await?;
///
/// let outcome = system.station_client.process_next_order().await?;
///
/// system.shutdown().await?;
/// ```
pub struct PickSystem {
    /// Client for interacting with the station
    pub station_client: StationClient,

    /// Task handle of the station (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl PickSystem {
    /// Starts a station that talks to the controller over TCP.
    pub fn new(config: &StationConfig) -> Self {
        Self::with_transmitter(TcpTransmitter::new(config.robot.host.clone()), config)
    }

    /// Starts a station over an arbitrary transmitter.
    pub fn with_transmitter<T: CommandTransmitter>(transmitter: T, config: &StationConfig) -> Self {
        let robot = ItemSorterRobot::new(transmitter, &config.robot);
        let (station, station_client) =
            PickStation::new(robot, config.settle_delay(), config.queue_depth);
        let handle = tokio::spawn(station.run());

        Self {
            station_client,
            handle,
        }
    }

    /// Queues `orders` in the given order and returns how many were added.
    pub async fn seed(&self, orders: Vec<Order>) -> Result<usize, StationError> {
        let count = orders.len();
        for order in orders {
            self.station_client.add_order(order).await?;
        }
        debug!(count, "Seeded orders");
        Ok(count)
    }

    /// Gracefully shuts down the station.
    ///
    /// Dropping the client closes the channel; the station finishes whatever request it
    /// is handling, leaves its loop, and the task is awaited.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.station_client);

        if let Err(e) = self.handle.await {
            error!("Station task failed: {:?}", e);
            return Err(format!("Station task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }

    /// Shuts down gracefully, then hands back `result`.
    ///
    /// For callers whose own work failed: the station is still stopped cleanly and the
    /// original error wins over a shutdown failure.
    pub async fn finish(self, result: Result<(), String>) -> Result<(), String> {
        let shutdown = self.shutdown().await;
        result.and(shutdown)
    }

    /// Stops the station immediately, abandoning any order in flight.
    pub async fn abort(self) {
        info!("Aborting station");
        self.handle.abort();
        let _ = self.handle.await;
    }
}
