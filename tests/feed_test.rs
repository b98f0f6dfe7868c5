//! Snapshot loading from files and from a local HTTP server.

mod common;

use std::io::Write;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_test::{assert_err, assert_ok};

use depthview::DepthviewError;
use depthview::feed::{fetch_snapshots, is_remote, spawn_snapshot_fetch};
use depthview::tui::Message;

use common::{SNAPSHOTS_JSON, fixture_path};

/// Serves exactly one HTTP response and returns the URL to request.
async fn serve_once(status: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("no local addr");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept failed");
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/assets/data/sample.json")
}

#[test]
fn test_remote_detection() {
    assert!(is_remote("http://localhost/data.json"));
    assert!(is_remote("https://example.com/data.json"));
    assert!(!is_remote("assets/data/sample.json"));
    assert!(!is_remote("/tmp/http.json"));
}

#[tokio::test]
async fn test_fetch_from_file() {
    let path = fixture_path("snapshots.json");
    let snapshots = assert_ok!(fetch_snapshots(path.to_str().unwrap()).await);

    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[1].time, "2021-01-01T00:00:01.124");
}

#[tokio::test]
async fn test_fetch_bundled_sample() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/sample.json");
    let snapshots = assert_ok!(fetch_snapshots(path.to_str().unwrap()).await);

    assert_eq!(snapshots.len(), 100);
    assert!(
        snapshots
            .iter()
            .all(|s| s.levels.iter().all(|l| l.bid_size.is_some() && l.ask_size.is_some()))
    );
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let err = assert_err!(fetch_snapshots("/definitely/not/here.json").await);
    assert!(matches!(err, DepthviewError::Io(_)));
}

#[tokio::test]
async fn test_invalid_json_file_is_json_error() {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    write!(file, "[{{\"Time\": 12}}]").expect("failed to write temp file");

    let err = assert_err!(fetch_snapshots(file.path().to_str().unwrap()).await);
    assert!(matches!(err, DepthviewError::Json(_)));
}

#[tokio::test]
async fn test_fetch_over_http() {
    let url = serve_once("200 OK", SNAPSHOTS_JSON.to_string()).await;

    let snapshots = assert_ok!(fetch_snapshots(&url).await);
    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[2].time, "2021-01-01T00:00:02.125");
}

#[tokio::test]
async fn test_http_error_status_fails() {
    let url = serve_once("404 Not Found", "not found".to_string()).await;

    let err = assert_err!(fetch_snapshots(&url).await);
    assert!(matches!(err, DepthviewError::Http(_)));
}

#[tokio::test]
async fn test_spawned_fetch_reports_success() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let path = fixture_path("snapshots.json");
    spawn_snapshot_fetch(tx, path.to_string_lossy().into_owned());

    match rx.recv().await {
        Some(Message::SnapshotsLoaded(snapshots)) => assert_eq!(snapshots.len(), 3),
        other => panic!("expected SnapshotsLoaded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_spawned_fetch_reports_failure() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_snapshot_fetch(tx, "/definitely/not/here.json".to_string());

    match rx.recv().await {
        Some(Message::LoadFailed(error)) => assert!(error.contains("here.json")),
        other => panic!("expected LoadFailed, got {other:?}"),
    }
}
