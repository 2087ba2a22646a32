//! Header bar - site, tempo, totals and event counters

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{UiStateInit, UiStateUpdate};

pub fn render_transport(frame: &mut Frame, area: Rect, init: &UiStateInit, update: &UiStateUpdate) {
    let block = Block::default()
        .title(format!(" presence · {} ", init.root))
        .borders(Borders::ALL);

    let (feed_symbol, feed_str, feed_color) = if update.feed_done {
        ("■", "Feed ended", Color::Yellow)
    } else {
        ("▶", "Listening", Color::Green)
    };
    let stats = &update.stats;

    let mut spans = vec![
        Span::styled(format!(" {} {}  ", feed_symbol, feed_str), Style::default().fg(feed_color)),
        Span::styled(
            format!("Occupancy: {}  ", update.counts.total()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(format!("Devices: {}  ", update.devices), Style::default().fg(Color::White)),
        Span::styled(
            format!(
                "+{} ~{} -{} ♥{}  ",
                stats.appearances, stats.displacements, stats.disappearances, stats.keep_alives
            ),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{:.0} BPM {}  {:.1}kHz ×{}", init.tempo_bpm, init.note, init.sample_rate / 1000.0, init.channels),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if stats.unplaced > 0 || update.bad_lines > 0 || update.dropped > 0 {
        spans.push(Span::styled(
            format!(
                "  unplaced {} · bad lines {} · dropped {}",
                stats.unplaced, update.bad_lines, update.dropped
            ),
            Style::default().fg(Color::Red),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
