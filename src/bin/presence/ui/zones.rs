//! Zone table - per-wing counts, floor count and drone level per floor

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use saavy_presence::presence::{Wing, Zone};

use super::{UiStateInit, UiStateUpdate};

/// Colors per floor (cycles if more floors)
const ZONE_COLORS: [Color; 4] = [Color::Magenta, Color::Cyan, Color::Green, Color::Yellow];

const LABEL_WIDTH: u16 = 8;
const WINGS_WIDTH: u16 = 24;
const COUNT_WIDTH: u16 = 8;

pub fn render_zones(frame: &mut Frame, area: Rect, init: &UiStateInit, update: &UiStateUpdate) {
    let block = Block::default().title(" Floors ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::once(Constraint::Length(1))
                .chain(Zone::ALL.iter().map(|_| Constraint::Length(2)))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(inner);

    let header = Line::from(vec![
        Span::styled(format!("{:<w$}", "floor", w = LABEL_WIDTH as usize), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:<w$}", "west centre east", w = WINGS_WIDTH as usize),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{:<w$}", "count", w = COUNT_WIDTH as usize), Style::default().fg(Color::DarkGray)),
        Span::styled("drone level", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(header), rows[0]);

    for (i, zone) in Zone::ALL.iter().enumerate() {
        render_zone_row(frame, rows[i + 1], *zone, init, update);
    }
}

fn render_zone_row(frame: &mut Frame, area: Rect, zone: Zone, init: &UiStateInit, update: &UiStateUpdate) {
    let color = ZONE_COLORS[zone.index() % ZONE_COLORS.len()];
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LABEL_WIDTH),
            Constraint::Length(WINGS_WIDTH),
            Constraint::Length(COUNT_WIDTH),
            Constraint::Min(10),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(zone.to_string(), Style::default().fg(color))),
        cols[0],
    );

    let wings = if zone.has_wings() {
        Wing::ALL
            .iter()
            .map(|&w| format!("{:>4}", update.counts.wing(zone, w).unwrap_or(0)))
            .collect::<Vec<_>>()
            .join("  ")
    } else {
        "     (single room)".to_string()
    };
    frame.render_widget(Paragraph::new(wings), cols[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{:>5}", update.counts.zone(zone)),
            Style::default().fg(Color::White),
        )),
        cols[2],
    );

    let level = update.levels[zone.index()];
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(level_ratio(level, init.base_db, init.multiplier_db))
            .label(format!("{level:.1} dB")),
        cols[3],
    );
}

/// Position of `level` between the base (empty building) and base +
/// multiplier (everyone on this floor).
fn level_ratio(level: f32, base_db: f32, multiplier_db: f32) -> f64 {
    let ratio = ((level - base_db) / multiplier_db) as f64;
    if multiplier_db <= 0.0 || !ratio.is_finite() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}
