//! Robot controller access: the transmission seam, its TCP implementation, and the
//! pick-and-place robot built on top of it.
//!
//! # Testing
//!
//! See the [`mock`] module for a transmitter that records traffic instead of sending it.

pub mod error;
pub mod mock;
pub mod sorter;
pub mod transmitter;

pub use error::*;
pub use sorter::*;
pub use transmitter::*;
