//! # Pick Robot
//!
//! > **A warehouse pick station driving a robot arm over plain-text TCP.**
//!
//! The station keeps a queue of orders. Each trigger takes the next order and, for every
//! unit on every line, sends a URScript pick-and-place program to the robot controller and
//! waits for the arm to settle. Nothing is read back from the robot.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`], [`order_book`])
//! - [`Item`](model::Item)s live in a [`Catalog`](model::Catalog); order lines share them
//!   through `Arc`.
//! - [`OrderBook`](order_book::OrderBook) is a strict FIFO. An empty book yields an empty
//!   list of lines rather than an error.
//!
//! ### 2. The Robot ([`robot`])
//! - [`CommandTransmitter`](robot::CommandTransmitter) is the only seam that touches the
//!   network; [`TcpTransmitter`](robot::TcpTransmitter) opens one connection per message.
//! - [`ItemSorterRobot`](robot::ItemSorterRobot) maps a bin to an X coordinate, renders
//!   the program, and sends brake-release plus program on two separate connections.
//!
//! ### 3. The Station ([`station`])
//! - [`PickStation`](station::PickStation) is an actor that owns the book and the robot
//!   and handles one request at a time.
//! - [`StationClient`](station::StationClient) is the cloneable handle to it.
//!
//! ### 4. The Runtime ([`lifecycle`], [`config`])
//! - [`PickSystem`](lifecycle::PickSystem) wires and spawns the station.
//! - [`StationConfig`](config::StationConfig) holds ports, host and settle time.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Point at a controller (or URSim) and start the prompt
//! PICK_ROBOT_HOST=192.168.0.10 cargo run
//!
//! # Running Tests
//! cargo test
//! ```

pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_book;
pub mod robot;
pub mod station;
