//! One-shot loading of the snapshot array.
//!
//! The source is either an HTTP(S) URL, fetched with a single GET, or a
//! path to a local JSON file. There is no retry and no partial result:
//! the caller gets every snapshot or an error.

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::Result;
use crate::models::snapshot::OrderBookSnapshot;
use crate::tui::Message;

/// Returns `true` if `source` should be fetched over HTTP.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetches every snapshot from `source`.
///
/// # Errors
///
/// Returns [`DepthviewError::Http`](crate::DepthviewError::Http) if the
/// request fails or the server answers with a non-success status,
/// [`DepthviewError::Io`](crate::DepthviewError::Io) if a local file cannot
/// be read, and [`DepthviewError::Json`](crate::DepthviewError::Json) if the
/// body is not an array of snapshot records.
pub async fn fetch_snapshots(source: &str) -> Result<Vec<OrderBookSnapshot>> {
    debug!(source, "fetching order book snapshots");

    let snapshots: Vec<OrderBookSnapshot> = if is_remote(source) {
        let response = reqwest::get(source).await?.error_for_status()?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body)?
    } else {
        let body = tokio::fs::read(source)
            .await
            .map_err(|e| crate::DepthviewError::Io(format!("failed to read {source}: {e}")))?;
        serde_json::from_slice(&body)?
    };

    info!(source, count = snapshots.len(), "loaded order book snapshots");
    Ok(snapshots)
}

/// Spawns the startup fetch and reports its outcome on `tx`.
///
/// A failure is logged and surfaced as [`Message::LoadFailed`]; nothing
/// retries it.
pub fn spawn_snapshot_fetch(tx: mpsc::UnboundedSender<Message>, source: String) {
    tokio::spawn(async move {
        let message = match fetch_snapshots(&source).await {
            Ok(snapshots) => Message::SnapshotsLoaded(snapshots),
            Err(e) => {
                error!(source = %source, error = %e, "error loading order book data");
                Message::LoadFailed(e.to_string())
            }
        };
        let _ = tx.send(message);
    });
}
