//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tracing::info;

use crate::models::snapshot::OrderBookSnapshot;
use crate::replay::Tick;

use super::app::App;

/// Events that can occur in the terminal.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),

    /// The startup fetch returned every snapshot.
    SnapshotsLoaded(Vec<OrderBookSnapshot>),
    /// The startup fetch failed.
    LoadFailed(String),
    /// One period of the replay timer elapsed.
    ReplayTick,

    /// Request to quit the application.
    Quit,
}

/// Actions that require external handling by the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start (or restart) the replay timer.
    StartReplayTimer,
    /// Cancel the replay timer.
    StopReplayTimer,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::SnapshotsLoaded(snapshots) => {
            app.load_snapshots(&snapshots);
            None
        }
        Message::LoadFailed(error) => {
            app.load_failed(error);
            None
        }
        Message::ReplayTick => match app.replay_tick() {
            Tick::Finished => {
                info!(index = app.navigator.index(), "replay reached last snapshot");
                Some(Action::StopReplayTimer)
            }
            Tick::Advanced(_) | Tick::Idle => None,
        },
        Message::Quit => quit(app),
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) | Event::Tick => None,
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => quit(app),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => quit(app),

        // Slider
        KeyCode::Char('l') | KeyCode::Right => {
            app.step_forward();
            None
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.step_back();
            None
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.jump_first();
            None
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.jump_last();
            None
        }

        // Replay controls
        KeyCode::Char('r') => replay(app),
        KeyCode::Char('s') => stop(app),
        KeyCode::Char(' ') => {
            if app.is_replaying() {
                stop(app)
            } else {
                replay(app)
            }
        }

        _ => None,
    }
}

fn replay(app: &mut App) -> Option<Action> {
    if app.start_replay() {
        info!("replay started");
        Some(Action::StartReplayTimer)
    } else {
        None
    }
}

fn stop(app: &mut App) -> Option<Action> {
    app.stop_replay();
    Some(Action::StopReplayTimer)
}

/// Quitting always tears the replay timer down.
fn quit(app: &mut App) -> Option<Action> {
    app.should_quit = true;
    stop(app)
}
