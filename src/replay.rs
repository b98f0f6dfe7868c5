//! Snapshot navigation and timed replay.
//!
//! [`Navigator`] owns the selected snapshot index and the replay flag.
//! [`ReplayTimer`] owns the background task that produces replay ticks;
//! the two are kept apart so state transitions stay synchronous and the
//! timer can be driven from any message loop.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Outcome of a replay tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The index moved forward to the contained value.
    Advanced(usize),
    /// The last snapshot was already shown; replay switched itself off.
    Finished,
    /// Replay was not running.
    Idle,
}

/// Slider position over `len` snapshots plus the replay flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    len: usize,
    replaying: bool,
}

impl Navigator {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            replaying: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    /// Highest selectable index, if any snapshots are loaded.
    pub fn last_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// Replaces the snapshot count, clamping the index into range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
        if len == 0 {
            self.replaying = false;
        }
    }

    /// Moves the slider to `index`, clamped to the last snapshot.
    ///
    /// Returns `true` if the index changed.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(last) = self.last_index() else {
            return false;
        };
        let target = index.min(last);
        let changed = target != self.index;
        self.index = target;
        changed
    }

    pub fn step_forward(&mut self) -> bool {
        self.select(self.index.saturating_add(1))
    }

    pub fn step_back(&mut self) -> bool {
        self.select(self.index.saturating_sub(1))
    }

    pub fn first(&mut self) -> bool {
        self.select(0)
    }

    pub fn last(&mut self) -> bool {
        self.select(usize::MAX)
    }

    /// Rewinds to the first snapshot and turns replay on.
    ///
    /// Returns `true` if the index changed.
    pub fn start_replay(&mut self) -> bool {
        let rewound = self.index != 0;
        self.index = 0;
        self.replaying = true;
        rewound
    }

    pub fn stop_replay(&mut self) {
        self.replaying = false;
    }

    /// Advances one snapshot while replaying.
    ///
    /// At the last snapshot the index stays put and replay turns off.
    pub fn tick(&mut self) -> Tick {
        if !self.replaying {
            return Tick::Idle;
        }
        match self.last_index() {
            Some(last) if self.index < last => {
                self.index += 1;
                Tick::Advanced(self.index)
            }
            _ => {
                self.replaying = false;
                Tick::Finished
            }
        }
    }
}

/// Background task that fires a callback at a fixed period.
///
/// The first tick lands one full period after [`ReplayTimer::start`].
/// Dropping the timer stops it.
#[derive(Debug, Default)]
pub struct ReplayTimer {
    handle: Option<JoinHandle<()>>,
}

impl ReplayTimer {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Starts ticking, replacing any timer that is already running.
    ///
    /// `on_tick` returning `false` ends the task (e.g. the receiver is gone).
    pub fn start<F>(&mut self, period: Duration, mut on_tick: F)
    where
        F: FnMut() -> bool + Send + 'static,
    {
        self.stop();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if !on_tick() {
                    debug!("replay tick receiver closed");
                    break;
                }
            }
        });

        info!(period_ms = period.as_millis() as u64, "replay timer started");
        self.handle = Some(handle);
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("replay timer stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ReplayTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
