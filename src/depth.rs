//! Chart-ready depth frames derived from raw snapshots.
//!
//! Each snapshot is pivoted into twenty [`DepthSample`]s: the ten bid levels
//! sorted by size ascending followed by the ten ask levels sorted by size
//! descending. [`group_by_side`] then partitions one frame's samples into
//! per-side series for rendering.

use rust_decimal::Decimal;

use crate::models::snapshot::{LEVELS, OrderBookSnapshot};

/// Book side a sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Side::Bid => "Bid",
            Side::Ask => "Ask",
        }
    }
}

/// One price level as plotted on the depth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthSample {
    /// Quoted price.
    pub value: Option<Decimal>,
    pub size: Option<Decimal>,
    pub side: Side,
}

/// A snapshot reshaped for charting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFrame {
    /// Timestamp without fractional seconds.
    pub time: String,
    /// Bids first, then asks; always `2 * LEVELS` entries.
    pub samples: Vec<DepthSample>,
}

/// Samples of one side, in frame order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGroup {
    pub side: Side,
    pub items: Vec<DepthSample>,
}

impl DepthFrame {
    /// Pivots a snapshot's levels into sorted bid and ask samples.
    pub fn from_snapshot(snapshot: &OrderBookSnapshot) -> Self {
        let mut bids = Vec::with_capacity(LEVELS);
        let mut asks = Vec::with_capacity(LEVELS);

        for level in &snapshot.levels {
            bids.push(DepthSample {
                value: level.bid,
                size: level.bid_size,
                side: Side::Bid,
            });
            asks.push(DepthSample {
                value: level.ask,
                size: level.ask_size,
                side: Side::Ask,
            });
        }

        // Stable sorts; a missing size orders below any present one.
        bids.sort_by(|a, b| a.size.cmp(&b.size));
        asks.sort_by(|a, b| b.size.cmp(&a.size));

        bids.extend(asks);

        Self {
            time: display_time(&snapshot.time).to_string(),
            samples: bids,
        }
    }

    pub fn bids(&self) -> impl Iterator<Item = &DepthSample> {
        self.samples.iter().filter(|s| s.side == Side::Bid)
    }

    pub fn asks(&self) -> impl Iterator<Item = &DepthSample> {
        self.samples.iter().filter(|s| s.side == Side::Ask)
    }

    /// Largest size across both sides, used to scale depth bars.
    pub fn max_size(&self) -> Option<Decimal> {
        self.samples.iter().filter_map(|s| s.size).max()
    }
}

/// Converts every snapshot into a [`DepthFrame`], preserving order.
pub fn depth_frames(snapshots: &[OrderBookSnapshot]) -> Vec<DepthFrame> {
    snapshots.iter().map(DepthFrame::from_snapshot).collect()
}

/// Truncates a timestamp before its first `.`.
///
/// A timestamp without fractional seconds is returned unchanged.
pub fn display_time(raw: &str) -> &str {
    match raw.find('.') {
        Some(pos) => &raw[..pos],
        None => raw,
    }
}

/// Partitions samples by side, in order of first appearance.
pub fn group_by_side(samples: &[DepthSample]) -> Vec<SampleGroup> {
    let mut groups: Vec<SampleGroup> = Vec::new();

    for sample in samples {
        match groups.iter_mut().find(|g| g.side == sample.side) {
            Some(group) => group.items.push(*sample),
            None => groups.push(SampleGroup {
                side: sample.side,
                items: vec![*sample],
            }),
        }
    }

    groups
}
