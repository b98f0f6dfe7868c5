use std::fs::File;
use std::sync::Mutex;

use depthview::config::{AppConfig, fetch_config};
use depthview::feed::spawn_snapshot_fetch;
use depthview::replay::ReplayTimer;
use depthview::tui::event::{spawn_event_reader, spawn_tick_timer, update};
use depthview::tui::{Action, App, Message, Tui, render, restore_terminal, setup_terminal};
use depthview::{DepthviewError, Result};
use tokio::sync::mpsc;
use tracing::info;

/// UI redraw cadence when nothing else happens.
const UI_TICK_MS: u64 = 250;

#[tokio::main]
async fn main() -> Result<()> {
    let config = fetch_config()?;

    // Stdout belongs to the TUI, so tracing output goes to a file.
    let log_file = File::create(&config.log_file)
        .map_err(|e| DepthviewError::Io(format!("failed to open {}: {e}", config.log_file)))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!(source = %config.data_source, "starting depth replay");

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &config).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run(terminal: &mut Tui, config: &AppConfig) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), UI_TICK_MS);
    spawn_snapshot_fetch(tx.clone(), config.data_source.clone());

    let mut app = App::new();
    let mut replay_timer = ReplayTimer::new();

    while !app.should_quit {
        terminal
            .draw(|frame| render(frame, &app))
            .map_err(|e| DepthviewError::Io(format!("failed to draw: {e}")))?;

        let Some(message) = rx.recv().await else {
            break;
        };

        match update(&mut app, message) {
            Some(Action::StartReplayTimer) => {
                let tick_tx = tx.clone();
                replay_timer.start(config.replay_interval, move || {
                    tick_tx.send(Message::ReplayTick).is_ok()
                });
            }
            Some(Action::StopReplayTimer) => replay_timer.stop(),
            None => {}
        }
    }

    replay_timer.stop();
    info!("depth replay exiting");
    Ok(())
}
