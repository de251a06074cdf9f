//! Pure data structures for the pick station: items, the catalog that owns them, and orders.

pub mod error;
pub mod item;
pub mod order;

pub use error::*;
pub use item::*;
pub use order::*;
