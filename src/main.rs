//! # kiosk
//!
//! Drives the ticket kiosk from a script file or from lines typed on stdin.
//! Directives go to stdout, logs go to stderr.

use anyhow::Context;
use clap::Parser;
use kiosk::config::KioskConfig;
use kiosk::effects::{JsonReporter, LineReporter, Reporter};
use kiosk::input::{parse_line, parse_script, EventSlot};
use kiosk::KioskBuilder;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file (catalog and loop tuning)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Replay events from this file instead of reading stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Emit directives as JSON lines
    #[arg(long)]
    json: bool,

    /// Delay between events posted from stdin, in milliseconds
    #[arg(long, default_value_t = 0)]
    pace_ms: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => KioskConfig::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => KioskConfig::default(),
    };

    let stdout = io::stdout();
    if cli.json {
        drive(&cli, &config, JsonReporter::new(stdout.lock()))
    } else {
        drive(&cli, &config, LineReporter::new(stdout.lock()))
    }
}

fn drive<R: Reporter>(cli: &Cli, config: &KioskConfig, reporter: R) -> anyhow::Result<()> {
    let mut kiosk = KioskBuilder::new()
        .config(config)?
        .reporter(reporter)
        .build()
        .context("Failed to build kiosk")?;

    if let Some(path) = &cli.script {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        let events = parse_script(&text)
            .with_context(|| format!("Invalid script {}", path.display()))?;
        kiosk.replay(events);
        return Ok(());
    }

    let slot = Arc::new(EventSlot::new());
    let stop = Arc::new(AtomicBool::new(false));
    let producer = spawn_stdin_producer(
        Arc::clone(&slot),
        Arc::clone(&stop),
        config.idle_interval(),
        Duration::from_millis(cli.pace_ms),
    );

    kiosk.run(&slot, &stop, config.idle_interval());

    producer
        .join()
        .map_err(|_| anyhow::anyhow!("stdin reader panicked"))?
        .context("Failed to read stdin")
}

/// Post one event per stdin line, waiting for the engine to take each.
/// Raises `stop` at end of input.
fn spawn_stdin_producer(
    slot: Arc<EventSlot>,
    stop: Arc<AtomicBool>,
    poll: Duration,
    pace: Duration,
) -> thread::JoinHandle<io::Result<()>> {
    thread::spawn(move || {
        let result = feed(&slot, poll, pace);
        while !slot.is_empty() {
            thread::sleep(poll);
        }
        stop.store(true, Ordering::Release);
        result
    })
}

fn feed(slot: &EventSlot, poll: Duration, pace: Duration) -> io::Result<()> {
    for (index, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        let event = match parse_line(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(error) => {
                tracing::warn!(line = index + 1, %error, "skipping input line");
                continue;
            }
        };

        while !slot.is_empty() {
            thread::sleep(poll);
        }
        slot.post(event);

        if !pace.is_zero() {
            thread::sleep(pace);
        }
    }
    Ok(())
}
