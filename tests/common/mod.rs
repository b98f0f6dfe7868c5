//! Shared test utilities and constants.
#![allow(dead_code)]

use std::path::PathBuf;

use depthview::models::OrderBookSnapshot;

/// Three snapshots with shuffled sizes; the last carries an extra field.
pub const SNAPSHOTS_JSON: &str = include_str!("../fixtures/snapshots.json");

/// One snapshot with only the first level partly filled.
pub const PARTIAL_SNAPSHOT_JSON: &str = include_str!("../fixtures/partial_snapshot.json");

/// Absolute path of a file in `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn fixture_snapshots() -> Vec<OrderBookSnapshot> {
    serde_json::from_str(SNAPSHOTS_JSON).expect("failed to decode snapshot fixture")
}
