//! # Mock Transmitter
//!
//! Utilities for testing the robot and the station without a controller on the network.
//!
//! [`MockTransmitter`] records every payload it is asked to send and answers from a queue
//! of expectations:
//!
//! ```ignore
//! let mock = MockTransmitter::new();
//! mock.expect_send(29999).return_ok();
//! mock.expect_send(30002).return_err("controller offline");
//!
//! let robot = ItemSorterRobot::new(mock.clone(), &RobotConfig::default());
//! assert!(robot.pick_up(location).await.is_err());
//!
//! mock.verify(); // every expectation was consumed
//! ```
//!
//! A mock built with [`MockTransmitter::accept_all`] skips expectations and succeeds on
//! every send, which is convenient when only the recorded traffic matters.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{CommandTransmitter, RobotError};

/// One message handed to the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentCommand {
    pub port: u16,
    pub payload: String,
}

struct Expectation {
    port: u16,
    response: Result<(), String>,
}

#[derive(Default)]
struct MockState {
    strict: bool,
    expectations: VecDeque<Expectation>,
    sent: Vec<SentCommand>,
}

/// A [`CommandTransmitter`] that never touches the network.
///
/// Clones share state, so keep one handle in the test and give another to the robot.
#[derive(Clone)]
pub struct MockTransmitter {
    state: Arc<Mutex<MockState>>,
}

impl MockTransmitter {
    /// Creates a strict mock: every send must match the next expectation.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                strict: true,
                ..MockState::default()
            })),
        }
    }

    /// Creates a mock that accepts any send without expectations.
    pub fn accept_all() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Expects the next send to target `port`.
    pub fn expect_send(&self, port: u16) -> SendExpectationBuilder {
        SendExpectationBuilder {
            port,
            state: self.state.clone(),
        }
    }

    /// Everything sent so far, in order.
    pub fn sent(&self) -> Vec<SentCommand> {
        self.state.lock().unwrap().sent.clone()
    }

    /// Payloads sent to `port`, in order.
    pub fn sent_to(&self, port: u16) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .sent
            .iter()
            .filter(|cmd| cmd.port == port)
            .map(|cmd| cmd.payload.clone())
            .collect()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

impl Default for MockTransmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandTransmitter for MockTransmitter {
    async fn send_string(&self, port: u16, message: &str) -> Result<(), RobotError> {
        let mut state = self.state.lock().unwrap();
        state.sent.push(SentCommand {
            port,
            payload: message.to_string(),
        });

        if !state.strict {
            return Ok(());
        }

        match state.expectations.pop_front() {
            Some(expectation) if expectation.port == port => {
                expectation.response.map_err(RobotError::Unavailable)
            }
            Some(expectation) => panic!(
                "Unexpected send to port {port}, expected port {}",
                expectation.port
            ),
            None => panic!("Unexpected send to port {port}, no expectations left"),
        }
    }
}

/// Builder for `send` expectations.
pub struct SendExpectationBuilder {
    port: u16,
    state: Arc<Mutex<MockState>>,
}

impl SendExpectationBuilder {
    /// The send succeeds.
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    /// The send fails with [`RobotError::Unavailable`].
    pub fn return_err(self, reason: impl Into<String>) {
        self.push(Err(reason.into()));
    }

    fn push(self, response: Result<(), String>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation {
            port: self.port,
            response,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_with_expectations() {
        let mock = MockTransmitter::new();
        mock.expect_send(1).return_ok();
        mock.expect_send(2).return_err("offline");

        mock.send_string(1, "first").await.unwrap();
        let err = mock.send_string(2, "second").await.unwrap_err();
        assert!(matches!(err, RobotError::Unavailable(reason) if reason == "offline"));

        assert_eq!(mock.sent_to(1), ["first"]);
        assert_eq!(mock.sent().len(), 2);
        mock.verify();
    }

    #[tokio::test]
    async fn test_accept_all_records_traffic() {
        let mock = MockTransmitter::accept_all();
        mock.send_string(7, "a").await.unwrap();
        mock.send_string(8, "b").await.unwrap();

        assert_eq!(
            mock.sent(),
            vec![
                SentCommand { port: 7, payload: "a".into() },
                SentCommand { port: 8, payload: "b".into() },
            ]
        );
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_panics_on_leftovers() {
        let mock = MockTransmitter::new();
        mock.expect_send(1).return_ok();
        mock.verify();
    }
}
