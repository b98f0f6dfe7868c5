//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, LoadState};

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let load_color = match app.load_state {
        LoadState::Loaded => Color::Green,
        LoadState::Loading => Color::Yellow,
        LoadState::Failed(_) => Color::Red,
    };

    let replay_span = if app.is_replaying() {
        Span::styled(
            " REPLAY ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" PAUSED ", Style::default().fg(Color::White))
    };

    let position = if app.navigator.is_empty() {
        " -/- ".to_string()
    } else {
        format!(" {}/{} ", app.navigator.index() + 1, app.navigator.len())
    };

    let time = app
        .current_frame()
        .map(|f| f.time.as_str())
        .unwrap_or("--");

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.load_state.label()),
            Style::default().fg(load_color),
        ),
        Span::raw("│"),
        replay_span,
        Span::raw("│"),
        Span::styled(position, Style::default().fg(Color::Cyan)),
        Span::raw("│"),
        Span::styled(
            format!(" {time} "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
