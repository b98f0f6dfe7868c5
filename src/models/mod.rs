//! Wire models for order book snapshot data.

pub mod snapshot;

pub use snapshot::{DepthLevel, LEVELS, OrderBookSnapshot};
