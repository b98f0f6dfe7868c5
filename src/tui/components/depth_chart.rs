//! Depth chart: one panel per side, one size bar per sample.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::depth::{SampleGroup, Side};
use crate::tui::app::{App, LoadState};

/// Widest bar drawn for the largest size on screen.
const MAX_BAR_WIDTH: usize = 30;

/// Renders the grouped series of the selected snapshot.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.current_frame() {
        Some(f) => format!(" Depth {} ", f.time),
        None => " Depth ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.current_series.is_empty() {
        let text = match &app.load_state {
            LoadState::Loading => "Loading order book data...",
            LoadState::Failed(_) => "No data (load failed, see log)",
            LoadState::Loaded => "No data",
        };
        let para = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(para, inner);
        return;
    }

    let max_size = app.current_frame().and_then(|f| f.max_size());

    let constraints: Vec<Constraint> = app
        .current_series
        .iter()
        .map(|_| Constraint::Ratio(1, app.current_series.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (group, column) in app.current_series.iter().zip(columns.iter()) {
        render_group(frame, *column, group, max_size);
    }
}

fn render_group(frame: &mut Frame, area: Rect, group: &SampleGroup, max_size: Option<Decimal>) {
    let color = side_color(group.side);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!("{:>12} {:>10}", group.side.label().to_uppercase(), "SIZE"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];

    let bar_room = (area.width as usize).saturating_sub(25).min(MAX_BAR_WIDTH);

    for sample in &group.items {
        let bar = "▒".repeat(bar_len(sample.size, max_size, bar_room));
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>12} ", format_decimal(sample.value, 2)),
                Style::default().fg(color),
            ),
            Span::raw(format!("{:>10} ", format_decimal(sample.size, 4))),
            Span::styled(bar, Style::default().fg(color)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn side_color(side: Side) -> Color {
    match side {
        Side::Bid => Color::Green,
        Side::Ask => Color::Red,
    }
}

/// Bar length proportional to `size / max`, at least one cell for any
/// positive size.
pub fn bar_len(size: Option<Decimal>, max: Option<Decimal>, room: usize) -> usize {
    let (Some(size), Some(max)) = (size, max) else {
        return 0;
    };
    if max <= Decimal::ZERO || size <= Decimal::ZERO {
        return 0;
    }
    let ratio = (size / max).to_f64().unwrap_or(0.0).clamp(0.0, 1.0);
    ((ratio * room as f64).round() as usize).clamp(1, room.max(1))
}

/// Formats an optional quote, `--` when the source omitted it.
pub fn format_decimal(value: Option<Decimal>, dp: u32) -> String {
    match value {
        Some(v) => v.round_dp(dp).to_string(),
        None => "--".to_string(),
    }
}
