//! Order book depth replay.
//!
//! Loads a series of top-of-book snapshots once, reshapes each into bid and
//! ask depth samples, and replays them in a terminal dashboard driven by a
//! time slider and a replay timer.

pub mod config;
pub mod depth;
pub mod error;
pub mod feed;
pub mod models;
pub mod replay;
pub mod tui;

pub use error::{DepthviewError, Result};
