//! Error types for talking to the robot controller.

use thiserror::Error;

/// Errors that can occur while sending commands to the controller.
///
/// Only network failures exist; the controller never answers, so there is nothing
/// to reject.
#[derive(Debug, Error)]
pub enum RobotError {
    /// The TCP connection could not be opened.
    #[error("Failed to connect to {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// The connection opened but the payload could not be written or flushed.
    #[error("Failed to write to port {port}: {source}")]
    Write {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// The transmitter refused the command without touching the network.
    #[error("Transmitter unavailable: {0}")]
    Unavailable(String),
}
