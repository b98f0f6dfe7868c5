//! Application configuration loaded from environment variables.
//!
//! - `DEPTHVIEW_DATA_SOURCE` — URL or file path of the snapshot array
//! - `DEPTHVIEW_REPLAY_INTERVAL_MS` — replay step period in milliseconds
//! - `DEPTHVIEW_LOG_FILE` — where tracing output is written
//!
//! Every variable is optional; empty values fall back to the defaults.

use std::time::Duration;

/// Default snapshot resource, relative to the working directory.
pub const DEFAULT_DATA_SOURCE: &str = "assets/data/sample.json";

/// Default replay step period.
pub const DEFAULT_REPLAY_INTERVAL_MS: u64 = 700;

/// Default log file. Stdout is owned by the terminal UI.
pub const DEFAULT_LOG_FILE: &str = "depthview.log";

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP(S) URL or local path of the snapshot JSON.
    pub data_source: String,
    /// Time between replay steps.
    pub replay_interval: Duration,
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            replay_interval: Duration::from_millis(DEFAULT_REPLAY_INTERVAL_MS),
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`DepthviewError::Config`](crate::DepthviewError::Config) if
/// `DEPTHVIEW_REPLAY_INTERVAL_MS` is not a positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let data_source =
        non_empty_var("DEPTHVIEW_DATA_SOURCE").unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string());

    let replay_interval = match non_empty_var("DEPTHVIEW_REPLAY_INTERVAL_MS") {
        Some(raw) => parse_interval_ms(&raw)?,
        None => Duration::from_millis(DEFAULT_REPLAY_INTERVAL_MS),
    };

    let log_file =
        non_empty_var("DEPTHVIEW_LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    Ok(AppConfig {
        data_source,
        replay_interval,
        log_file,
    })
}

fn parse_interval_ms(raw: &str) -> crate::Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(crate::DepthviewError::Config(format!(
            "DEPTHVIEW_REPLAY_INTERVAL_MS must be a positive integer, got {raw:?}"
        ))),
    }
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
