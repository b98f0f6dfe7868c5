//! Time slider bound to the snapshot index.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Block, Borders, LineGauge},
};

use crate::tui::app::App;

/// Renders the slider with the selected snapshot's display time as label.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let index = app.navigator.index();
    let ratio = match app.navigator.last_index() {
        Some(last) if last > 0 => index as f64 / last as f64,
        _ => 0.0,
    };

    let label = app.slider_label(index).unwrap_or("--").to_string();

    let border_style = if app.is_replaying() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let gauge = LineGauge::default()
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .filled_style(Style::default().fg(Color::Cyan))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .line_set(symbols::line::THICK)
        .label(label)
        .ratio(ratio.clamp(0.0, 1.0));

    frame.render_widget(gauge, area);
}
