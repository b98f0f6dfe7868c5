//! Terminal user interface for depth replay.
//!
//! Provides a Ratatui-based dashboard with a depth chart, a time slider
//! bound to the snapshot index, and replay controls.

pub mod app;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
