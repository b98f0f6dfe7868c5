//! Rendering smoke tests on an in-memory backend.

mod common;

use ratatui::{Terminal, backend::TestBackend};

use depthview::tui::event::update;
use depthview::tui::{App, Message, render};

use common::fixture_snapshots;

/// Draws `app` and returns the screen as text, one line per row.
fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("test terminal");
    terminal.draw(|frame| render(frame, app)).expect("draw");

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_renders_loading_state() {
    let screen = draw(&App::new());

    assert!(screen.contains("Loading..."));
    assert!(screen.contains("-/-"));
}

#[test]
fn test_renders_selected_snapshot() {
    let mut app = App::new();
    update(&mut app, Message::SnapshotsLoaded(fixture_snapshots()));
    app.select(1);

    let screen = draw(&app);
    assert!(screen.contains("2021-01-01T00:00:01"));
    assert!(screen.contains("2/3"));
    assert!(screen.contains("BID"));
    assert!(screen.contains("ASK"));
    assert!(screen.contains("PAUSED"));
}

#[test]
fn test_renders_replay_badge() {
    let mut app = App::new();
    update(&mut app, Message::SnapshotsLoaded(fixture_snapshots()));
    app.start_replay();

    let screen = draw(&app);
    assert!(screen.contains("REPLAY"));
    assert!(screen.contains("stop"));
}

#[test]
fn test_renders_failure_hint() {
    let mut app = App::new();
    update(&mut app, Message::LoadFailed("boom".into()));

    let screen = draw(&app);
    assert!(screen.contains("Load failed"));
    assert!(screen.contains("see log"));
}
