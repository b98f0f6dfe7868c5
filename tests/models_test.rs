//! Deserialization tests for snapshot records.

mod common;

use rust_decimal_macros::dec;

use depthview::models::{DepthLevel, OrderBookSnapshot};

use common::{PARTIAL_SNAPSHOT_JSON, fixture_snapshots};

#[test]
fn test_snapshot_array_deserializes() {
    let snapshots = fixture_snapshots();

    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[0].time, "2021-01-01T00:00:00.123");

    let first: &DepthLevel = &snapshots[0].levels[0];
    assert_eq!(first.bid, Some(dec!(99)));
    assert_eq!(first.bid_size, Some(dec!(5)));
    assert_eq!(first.ask, Some(dec!(101)));
    assert_eq!(first.ask_size, Some(dec!(3)));

    let tenth: &DepthLevel = &snapshots[0].levels[9];
    assert_eq!(tenth.bid, Some(dec!(90)));
    assert_eq!(tenth.ask_size, Some(dec!(7)));
}

#[test]
fn test_fractional_sizes_deserialize() {
    let snapshots = fixture_snapshots();
    assert_eq!(snapshots[1].levels[9].bid_size, Some(dec!(0.5)));
    assert_eq!(snapshots[2].levels[1].ask_size, Some(dec!(0.25)));
}

#[test]
fn test_unknown_fields_are_ignored() {
    // The third fixture record carries a `Symbol` field.
    let snapshots = fixture_snapshots();
    assert_eq!(snapshots[2].time, "2021-01-01T00:00:02.125");
    assert!(snapshots[2].levels.iter().all(|l| l.bid.is_some()));
}

#[test]
fn test_missing_levels_are_none() {
    let snapshots: Vec<OrderBookSnapshot> =
        serde_json::from_str(PARTIAL_SNAPSHOT_JSON).expect("Failed to deserialize partial");

    let level = &snapshots[0].levels[0];
    assert_eq!(level.bid, Some(dec!(99.5)));
    assert_eq!(level.bid_size, Some(dec!(1.5)));
    assert_eq!(level.ask, Some(dec!(100.5)));
    assert_eq!(level.ask_size, None);
    assert!(snapshots[0].levels[1..].iter().all(|l| *l == DepthLevel::default()));
}

#[test]
fn test_non_array_payload_is_rejected() {
    let result = serde_json::from_str::<Vec<OrderBookSnapshot>>(r#"{"Time":"t"}"#);
    assert!(result.is_err());
}
