//! Recent events log - newest first

use std::collections::VecDeque;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use saavy_presence::presence::EventKind;

use super::state::EventRecord;

const NOTE_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// MIDI note number to name with octave: 48 → "C3".
fn note_name(note: u8) -> String {
    let octave = note as i32 / 12 - 1;
    format!("{}{}", NOTE_NAMES[note as usize % 12], octave)
}

fn kind_color(kind: EventKind) -> Color {
    match kind {
        EventKind::Appearance => Color::Green,
        EventKind::Displacement => Color::Cyan,
        EventKind::Disappearance => Color::Red,
        EventKind::KeepAlive => Color::DarkGray,
    }
}

pub fn render_events(frame: &mut Frame, area: Rect, recent: &VecDeque<EventRecord>) {
    let block = Block::default().title(" Recent events ").borders(Borders::ALL);
    let visible = block.inner(area).height as usize;

    let lines: Vec<Line> = recent
        .iter()
        .rev()
        .take(visible)
        .map(|rec| {
            let place = match rec.location.zone {
                Some(zone) if zone.has_wings() => format!("{} {}", zone, rec.location.wing),
                Some(zone) => zone.to_string(),
                None => "unknown floor".to_string(),
            };
            let note = rec.note.map(note_name).unwrap_or_else(|| "-".to_string());
            Line::from(vec![
                Span::styled(format!("{:>6} ", rec.seq), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{:<14}", rec.kind.name()), Style::default().fg(kind_color(rec.kind))),
                Span::raw(format!("{:<16}", place)),
                Span::styled(note, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
