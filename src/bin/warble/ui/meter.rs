//! Per-channel peak bar widgets

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use warble_dsp::dsp::level::DB_FLOOR;

/// Bars span this dB range; anything below collapses to an empty bar.
const DISPLAY_FLOOR_DB: f32 = -60.0;

/// Render one bar per channel, top to bottom.
pub fn render_meters(frame: &mut Frame, area: Rect, peaks_db: &[f32]) {
    let block = Block::default()
        .title(" Peak Programme ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if peaks_db.is_empty() || inner.height == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(2); peaks_db.len()])
        .split(inner);

    for (ch, (&db, row)) in peaks_db.iter().zip(rows.iter()).enumerate() {
        let ratio = ((db - DISPLAY_FLOOR_DB) / -DISPLAY_FLOOR_DB).clamp(0.0, 1.0);
        let color = if db > -6.0 {
            Color::Red
        } else if db > -18.0 {
            Color::Yellow
        } else {
            Color::Green
        };
        let label = if db <= DB_FLOOR {
            format!("ch {ch}: silent")
        } else {
            format!("ch {ch}: {db:>6.1} dB")
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(f64::from(ratio))
            .label(label);
        frame.render_widget(gauge, *row);
    }
}
