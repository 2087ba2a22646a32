//! presence - play a building's device traffic as sound
//!
//! Reads newline-delimited JSON presence events (stdin by default) and
//! sonifies them live, with a terminal dashboard of floor occupancy.
//!
//! Run with: cargo run --bin presence -- --input events.ndjson

mod app;
mod ui;

use std::{fs::File, path::PathBuf, sync::Mutex};

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use saavy_presence::Config;
use tracing_subscriber::EnvFilter;

use app::Presence;

#[derive(Debug, Parser)]
#[command(name = "presence", version, about = "Sonify device presence events")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Event feed (newline-delimited JSON); stdin if omitted
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// No dashboard: play until the feed ends, log to stderr
    #[arg(long)]
    headless: bool,

    /// Log every dispatched event
    #[arg(short, long)]
    verbose: bool,

    /// Write logs here (the dashboard otherwise discards them)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    Presence::new(config)
        .input(cli.input)
        .headless(cli.headless)
        .run()
}

/// Logs go to stderr headless, to `--log-file` if given, and nowhere
/// otherwise so they can't tear the dashboard.
fn init_tracing(cli: &Cli) -> EyreResult<()> {
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if let Some(path) = &cli.log_file {
        let file = File::create(path).wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else if cli.headless {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}
