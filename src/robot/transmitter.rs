//! # Command Transmission
//!
//! The controller speaks plain text over TCP with no framing and no replies.
//! [`CommandTransmitter`] is the seam: the robot logic only knows "send this string
//! to that port", and [`TcpTransmitter`] is the one implementation that hits the wire.
//! Tests swap in [`MockTransmitter`](crate::robot::mock::MockTransmitter).

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{debug, instrument};

use super::RobotError;

/// Capability to push a text payload to one port of the robot controller.
#[async_trait]
pub trait CommandTransmitter: Send + Sync + 'static {
    /// Sends `message` to `port` and returns once it has been handed to the network.
    ///
    /// Nothing is read back. Success only means the bytes left this process.
    async fn send_string(&self, port: u16, message: &str) -> Result<(), RobotError>;
}

/// Opens a fresh TCP connection for every message: connect, write, close.
#[derive(Debug, Clone)]
pub struct TcpTransmitter {
    host: String,
}

impl TcpTransmitter {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

#[async_trait]
impl CommandTransmitter for TcpTransmitter {
    #[instrument(skip(self, message), fields(host = %self.host))]
    async fn send_string(&self, port: u16, message: &str) -> Result<(), RobotError> {
        let mut stream = TcpStream::connect((self.host.as_str(), port))
            .await
            .map_err(|source| RobotError::Connect {
                host: self.host.clone(),
                port,
                source,
            })?;

        // The controller expects ASCII; anything else is replaced rather than sent raw.
        let payload: Vec<u8> = message
            .chars()
            .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
            .collect();

        stream
            .write_all(&payload)
            .await
            .map_err(|source| RobotError::Write { port, source })?;
        stream
            .shutdown()
            .await
            .map_err(|source| RobotError::Write { port, source })?;

        debug!(port, bytes = payload.len(), "Sent");
        Ok(())
    }
}
