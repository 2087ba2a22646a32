//! TUI module for presence
//!
//! Live view of floor occupancy, drone levels and the event stream.

mod events;
pub mod state;
mod transport;
mod zones;

use std::{collections::VecDeque, time::Duration};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::Consumer;

pub use state::{EventRecord, UiStateInit, UiStateUpdate};

use events::render_events;
use transport::render_transport;
use zones::render_zones;

/// How many events the log keeps
const RECENT_EVENTS: usize = 256;

/// UI application state
pub struct UiApp {
    /// Ring buffer receiver for state updates from the event thread
    state_rx: Consumer<UiStateUpdate>,
    init: UiStateInit,
    /// Latest state received
    current: UiStateUpdate,
    recent: VecDeque<EventRecord>,
    should_quit: bool,
}

impl UiApp {
    pub fn new(state_rx: Consumer<UiStateUpdate>, init: UiStateInit, initial: UiStateUpdate) -> Self {
        Self {
            state_rx,
            init,
            current: initial,
            recent: VecDeque::with_capacity(RECENT_EVENTS),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_state();

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~30fps)
            if event::poll(Duration::from_millis(33))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Apply every pending update; each may carry one event for the log
    fn poll_state(&mut self) {
        while let Ok(update) = self.state_rx.pop() {
            if let Some(record) = update.last {
                if self.recent.len() == RECENT_EVENTS {
                    self.recent.pop_front();
                }
                self.recent.push_back(record);
            }
            self.current = update;
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if let KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc = key {
            self.should_quit = true;
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Header
                Constraint::Length(11), // Floors: header row + 4 × 2
                Constraint::Min(4),     // Recent events
                Constraint::Length(1),  // Help bar
            ])
            .split(frame.area());

        render_transport(frame, chunks[0], &self.init, &self.current);
        render_zones(frame, chunks[1], &self.init, &self.current);
        render_events(frame, chunks[2], &self.recent);

        let help = Paragraph::new(" [Q] Quit").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
