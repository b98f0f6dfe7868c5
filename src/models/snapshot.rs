//! Top-of-book depth snapshot records.
//!
//! The wire format is a flat object: `Time` plus `Bid{i}`, `Bid{i}Size`,
//! `Ask{i}`, `Ask{i}Size` for `i` in `1..=10`. Levels are collected into a
//! fixed array so the rest of the crate never deals with field names.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

/// Number of price levels captured per side in every snapshot.
pub const LEVELS: usize = 10;

/// One timestamped capture of the top ten bid/ask levels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawSnapshot")]
pub struct OrderBookSnapshot {
    /// Raw timestamp as sent by the source, fractional seconds included.
    pub time: String,
    /// Level `i` of the book lives at index `i - 1`.
    pub levels: [DepthLevel; LEVELS],
}

/// Bid and ask quotes at one depth level.
///
/// A field missing from the payload is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthLevel {
    pub bid: Option<Decimal>,
    pub bid_size: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub ask_size: Option<Decimal>,
}

impl OrderBookSnapshot {
    /// Builds a snapshot from already-parsed levels.
    pub fn new(time: impl Into<String>, levels: [DepthLevel; LEVELS]) -> Self {
        Self {
            time: time.into(),
            levels,
        }
    }
}

#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(rename = "Time")]
    time: String,
    #[serde(flatten)]
    fields: HashMap<String, Value>,
}

impl TryFrom<RawSnapshot> for OrderBookSnapshot {
    type Error = String;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        let mut levels = [DepthLevel::default(); LEVELS];

        for (i, level) in levels.iter_mut().enumerate() {
            let n = i + 1;
            level.bid = decimal_field(&raw.fields, &format!("Bid{n}"))?;
            level.bid_size = decimal_field(&raw.fields, &format!("Bid{n}Size"))?;
            level.ask = decimal_field(&raw.fields, &format!("Ask{n}"))?;
            level.ask_size = decimal_field(&raw.fields, &format!("Ask{n}Size"))?;
        }

        Ok(Self {
            time: raw.time,
            levels,
        })
    }
}

/// Reads an optional numeric field, accepting JSON numbers or numeric strings.
fn decimal_field(fields: &HashMap<String, Value>, key: &str) -> Result<Option<Decimal>, String> {
    let text = match fields.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => return Err(format!("field `{key}` is not numeric: {other}")),
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map(Some)
        .map_err(|e| format!("field `{key}` has invalid number {text:?}: {e}"))
}
