//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use super::app::App;
use super::components::{depth_chart, slider, status_bar};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Status bar
            Constraint::Min(13),    // Depth chart
            Constraint::Length(3),  // Slider
            Constraint::Length(1),  // Keybindings help
        ])
        .split(frame.area());

    status_bar::render(frame, layout[0], app);
    depth_chart::render(frame, layout[1], app);
    slider::render(frame, layout[2], app);
    render_keybindings(frame, layout[3], app);
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect, app: &App) {
    let toggle = if app.is_replaying() {
        "[s/space]stop"
    } else {
        "[r/space]replay"
    };
    let help = format!("[←/h][→/l]step [g]first [G]last {toggle} [q]quit");

    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
