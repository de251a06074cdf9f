//! Runtime orchestration: wiring the station to a real controller, seeding it, and
//! setting up logging.
//!
//! - [`PickSystem`] - builds, spawns and shuts down the pick station
//! - [`sample_catalog`] / [`sample_orders`] - the demo data every run starts from
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod pick_system;
pub mod seed;
pub mod tracing;

pub use pick_system::*;
pub use seed::*;
pub use self::tracing::*;
