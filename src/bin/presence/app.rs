//! Presence - application builder and runner

use std::{io::BufRead, path::PathBuf, thread, time::Duration};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;
use tracing::{error, info, warn};

use saavy_presence::{
    engine::{self, EngineHandle},
    io::EventFeed,
    presence::{DirectoryTracker, EventKind},
    Config, Dispatcher,
};

use super::ui::{EventRecord, UiApp, UiStateInit, UiStateUpdate};

/// Capacity of the event-thread → UI queue
const UI_QUEUE_SIZE: usize = 1024;

/// How long headless mode keeps the device open after the feed ends, so
/// the last notes can ring out (displacement has a 2 s release plus echo).
const TAIL: Duration = Duration::from_millis(2500);

/// Main application builder
pub struct Presence {
    config: Config,
    input: Option<PathBuf>,
    headless: bool,
}

impl Presence {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            input: None,
            headless: false,
        }
    }

    /// Read events from a file instead of stdin
    pub fn input(mut self, path: Option<PathBuf>) -> Self {
        self.input = path;
        self
    }

    /// Skip the dashboard
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Run the application (takes over, plays audio)
    pub fn run(self) -> EyreResult<()> {
        // Set up audio
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let stream_config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = stream_config.sample_rate().0 as f32;
        let channels = stream_config.channels() as usize;
        info!(sample_rate, channels, root = %self.config.root, "audio device ready");

        let (handle, mut mixer) = engine::channel(&self.config, sample_rate);

        let stream = device
            .build_output_stream(
                &stream_config.into(),
                move |data: &mut [f32], _| mixer.render_interleaved(data, channels),
                |err| error!(%err, "audio stream error"),
                None,
            )
            .wrap_err("failed to build output stream")?;
        stream.play().wrap_err("failed to start output stream")?;

        let feed = saavy_presence::io::open(self.input.as_deref())
            .wrap_err_with(|| match &self.input {
                Some(path) => format!("failed to open {}", path.display()),
                None => "failed to open stdin".to_string(),
            })?;
        let mut event_loop = EventLoop::new(Dispatcher::from_config(&self.config), handle);

        if self.headless {
            event_loop.run(feed, |_| {})?;
            thread::sleep(TAIL);
            return Ok(());
        }

        let init = UiStateInit {
            root: self.config.root.clone(),
            tempo_bpm: self.config.tempo_bpm,
            note: self.config.note_duration.to_string(),
            sample_rate,
            channels,
            base_db: self.config.ambient.base_db,
            multiplier_db: self.config.ambient.multiplier_db,
        };
        let initial = event_loop.update(None, false);
        let (mut state_tx, state_rx) = RingBuffer::<UiStateUpdate>::new(UI_QUEUE_SIZE);

        let events = thread::Builder::new()
            .name("presence-events".into())
            .spawn(move || {
                event_loop.run(feed, |update| {
                    // A lagging UI only loses log lines; the next update
                    // carries the full counts again.
                    let _ = state_tx.push(update);
                })
            })
            .wrap_err("failed to spawn event thread")?;

        let mut terminal = ratatui::init();
        let result = UiApp::new(state_rx, init, initial).run(&mut terminal);
        ratatui::restore();
        result?;

        // The event thread may still be blocked on input; only a finished
        // thread has an outcome worth reporting.
        if events.is_finished() {
            events
                .join()
                .map_err(|_| eyre!("event thread panicked"))??;
        }
        Ok(())
    }
}

/// Everything the event thread owns: the directory map, the dispatcher and
/// the sending half of the audio engine.
struct EventLoop {
    tracker: DirectoryTracker,
    dispatcher: Dispatcher,
    engine: EngineHandle,
    seq: u64,
    bad_lines: u64,
}

impl EventLoop {
    fn new(mut dispatcher: Dispatcher, mut engine: EngineHandle) -> Self {
        let tracker = DirectoryTracker::new();
        dispatcher.refresh(&tracker, &mut engine);
        Self {
            tracker,
            dispatcher,
            engine,
            seq: 0,
            bad_lines: 0,
        }
    }

    /// Consume the feed to the end, calling `publish` after every line.
    fn run<R: BufRead>(&mut self, feed: EventFeed<R>, mut publish: impl FnMut(UiStateUpdate)) -> EyreResult<()> {
        for item in feed {
            match item {
                Ok(event) => {
                    self.seq += 1;
                    // The tracker must see the event before the dispatcher
                    // recounts from it.
                    self.tracker.apply(&event);
                    let dispatched = self.dispatcher.handle(&event, &self.tracker, &mut self.engine);

                    let record = (dispatched.kind != EventKind::KeepAlive)
                        .then(|| EventRecord::from_dispatched(self.seq, &dispatched));
                    publish(self.update(record, false));
                }
                Err(e) if e.is_recoverable() => {
                    self.bad_lines += 1;
                    warn!(error = %e, "skipping malformed event");
                    publish(self.update(None, false));
                }
                Err(e) => return Err(e).wrap_err("event feed failed"),
            }
        }

        info!(
            events = self.seq,
            bad_lines = self.bad_lines,
            dropped = self.engine.dropped(),
            "feed ended"
        );
        publish(self.update(None, true));
        Ok(())
    }

    fn update(&self, last: Option<EventRecord>, feed_done: bool) -> UiStateUpdate {
        UiStateUpdate {
            counts: *self.dispatcher.counts(),
            levels: self.dispatcher.levels().as_array(),
            stats: *self.dispatcher.stats(),
            devices: self.tracker.device_total(),
            bad_lines: self.bad_lines,
            dropped: self.engine.dropped(),
            last,
            feed_done,
        }
    }
}
