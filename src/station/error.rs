//! Error types for the pick station.

use thiserror::Error;

use crate::robot::RobotError;

/// Errors surfaced to callers of the [`StationClient`](crate::station::StationClient).
#[derive(Debug, Error)]
pub enum StationError {
    /// The station task has stopped and no longer accepts requests.
    #[error("Station closed")]
    ActorClosed,

    /// The station dropped the response channel before answering.
    #[error("Station dropped response channel")]
    ActorDropped,

    /// A robot command failed; the rest of the order was abandoned.
    #[error("Robot command failed: {0}")]
    Robot(#[from] RobotError),
}
