//! The pick station: an actor that owns the order book and the robot and works through
//! one order per trigger.
//!
//! - [`PickStation`] - the actor itself, generic over the robot's transmitter
//! - [`StationClient`] - cloneable handle used to queue orders and trigger picking
//! - [`ProcessOutcome`] - what a trigger did

pub mod actor;
pub mod client;
pub mod error;
pub mod message;

pub use actor::*;
pub use client::*;
pub use error::*;
pub use message::*;
