//! Reusable screen regions.

pub mod depth_chart;
pub mod slider;
pub mod status_bar;
