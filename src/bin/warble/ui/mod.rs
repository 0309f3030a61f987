//! TUI for warble
//!
//! A header describing the audio chain, one peak bar per channel, and a
//! help line.

mod meter;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::SourceInfo;
use meter::render_meters;

/// Render the whole UI.
pub fn render(frame: &mut Frame, info: &SourceInfo, peaks_db: &[f32]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(4),    // Meters
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], info);
    render_meters(frame, chunks[1], peaks_db);

    let help = Paragraph::new(" [Q] Quit").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect, info: &SourceInfo) {
    let block = Block::default().title(" warble ").borders(Borders::ALL);

    let sample_rate_khz = info.sample_rate / 1000.0;
    let line = Line::from(vec![
        Span::styled(
            format!(" {}  ", info.name),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{:.1}kHz / {}ch  ", sample_rate_khz, info.num_channels),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(
                "attack {:.0}ms / release {:.1}s",
                info.attack_sec * 1000.0,
                info.release_sec
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
