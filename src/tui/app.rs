//! Application state for the TUI.

use crate::depth::{DepthFrame, SampleGroup, depth_frames, group_by_side};
use crate::models::snapshot::OrderBookSnapshot;
use crate::replay::{Navigator, Tick};

/// Central application state container.
#[derive(Debug, Default)]
pub struct App {
    // -- Data --
    /// Every snapshot in chart-ready form, held for the whole session.
    pub frames: Vec<DepthFrame>,
    /// Grouped samples of the selected frame.
    pub current_series: Vec<SampleGroup>,
    pub load_state: LoadState,

    // -- Navigation --
    pub navigator: Navigator,

    // -- Internal --
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App instance waiting for its snapshots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts freshly fetched snapshots and shows the first one.
    pub fn load_snapshots(&mut self, snapshots: &[OrderBookSnapshot]) {
        self.frames = depth_frames(snapshots);
        self.navigator = Navigator::new(self.frames.len());
        self.load_state = LoadState::Loaded;
        self.refresh_series();
    }

    /// Records a failed fetch; the view stays empty.
    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.load_state = LoadState::Failed(message.into());
    }

    /// Display times of every frame, indexed like the slider.
    pub fn navigation(&self) -> Vec<&str> {
        self.frames.iter().map(|f| f.time.as_str()).collect()
    }

    /// Label for a slider position.
    pub fn slider_label(&self, index: usize) -> Option<&str> {
        self.frames.get(index).map(|f| f.time.as_str())
    }

    pub fn current_frame(&self) -> Option<&DepthFrame> {
        self.frames.get(self.navigator.index())
    }

    pub fn is_replaying(&self) -> bool {
        self.navigator.is_replaying()
    }

    /// Moves the slider to `index` and regroups the selected frame.
    pub fn select(&mut self, index: usize) {
        if self.navigator.select(index) {
            self.refresh_series();
        }
    }

    pub fn step_forward(&mut self) {
        if self.navigator.step_forward() {
            self.refresh_series();
        }
    }

    pub fn step_back(&mut self) {
        if self.navigator.step_back() {
            self.refresh_series();
        }
    }

    pub fn jump_first(&mut self) {
        if self.navigator.first() {
            self.refresh_series();
        }
    }

    pub fn jump_last(&mut self) {
        if self.navigator.last() {
            self.refresh_series();
        }
    }

    /// Rewinds to the first frame and turns replay on.
    ///
    /// Returns `false` when there is nothing to replay.
    pub fn start_replay(&mut self) -> bool {
        if self.frames.is_empty() {
            return false;
        }
        if self.navigator.start_replay() {
            self.refresh_series();
        }
        true
    }

    pub fn stop_replay(&mut self) {
        self.navigator.stop_replay();
    }

    /// Applies one replay tick.
    pub fn replay_tick(&mut self) -> Tick {
        let tick = self.navigator.tick();
        if let Tick::Advanced(_) = tick {
            self.refresh_series();
        }
        tick
    }

    fn refresh_series(&mut self) {
        self.current_series = self
            .current_frame()
            .map(|frame| group_by_side(&frame.samples))
            .unwrap_or_default();
    }
}

/// Progress of the startup fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    /// Returns a display string for the state.
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading => "Loading...",
            LoadState::Loaded => "Loaded",
            LoadState::Failed(_) => "Load failed",
        }
    }
}
