//! Application entry point and dispatch.

use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;

use launchview_core::{username, Console, ConsoleEvent, Severity};
use launchview_tui::{MetricsCollector, TuiApp, TuiMessage};

use crate::config::AppConfig;

/// File name prefix for console exports.
const EXPORT_PREFIX: &str = "launchview-logs";

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "launchview", &mut std::io::stdout());
        return Ok(());
    }

    // Validate the player name before any terminal setup
    if let Some(name) = &config.player {
        username::validate(name)?;
    }

    if config.plain {
        run_plain(config)
    } else {
        run_tui(config)
    }
}

/// Turn one input line into a console event.
///
/// In JSON mode an unparseable line degrades to a raw `info` log line
/// rather than being dropped.
fn parse_line(line: String, json: bool) -> ConsoleEvent {
    if json {
        match serde_json::from_str::<ConsoleEvent>(&line) {
            Ok(event) => event,
            Err(err) => {
                tracing::debug!("unparseable event line, keeping as raw log: {err}");
                ConsoleEvent::line(line)
            }
        }
    } else {
        ConsoleEvent::line(line)
    }
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();
    let stop = Arc::new(AtomicBool::new(false));

    // Welcome trace: the console greets before the producer speaks.
    let _ = tx.send(TuiMessage::Event(ConsoleEvent::Log {
        message: "Console started".to_string(),
        severity: Some("success".to_string()),
    }));
    let _ = tx.send(TuiMessage::Event(ConsoleEvent::line("Waiting for output...")));
    let _ = tx.send(TuiMessage::Event(ConsoleEvent::Status {
        status: "Starting...".to_string(),
    }));

    // Spawn the stdin reader thread
    let reader_tx = tx.clone();
    let reader_stop = Arc::clone(&stop);
    let json = config.json;
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut first = true;
        for line in stdin.lock().lines() {
            if reader_stop.load(Ordering::Relaxed) {
                return;
            }
            match line {
                Ok(line) => {
                    if first {
                        first = false;
                        let _ = reader_tx.send(TuiMessage::Event(ConsoleEvent::Status {
                            status: "Running".to_string(),
                        }));
                    }
                    if reader_tx
                        .send(TuiMessage::Event(parse_line(line, json)))
                        .is_err()
                    {
                        return; // channel closed, TUI exited
                    }
                }
                Err(err) => {
                    let _ = reader_tx.send(TuiMessage::Event(ConsoleEvent::Status {
                        status: "Error".to_string(),
                    }));
                    let _ = reader_tx.send(TuiMessage::Error(format!("Input stream error: {err}")));
                    return;
                }
            }
        }
        let _ = reader_tx.send(TuiMessage::Event(ConsoleEvent::Status {
            status: "Stopped".to_string(),
        }));
        let _ = reader_tx.send(TuiMessage::Event(ConsoleEvent::line(
            "Input stream closed. Press 'q' to quit.",
        )));
    });

    // Spawn the metrics sampler thread
    let sampler = if config.no_metrics {
        None
    } else {
        let metrics_tx = tx.clone();
        let metrics_stop = Arc::clone(&stop);
        let period = config.metrics_period_duration();
        Some(std::thread::spawn(move || {
            let mut collector = MetricsCollector::new();
            while !metrics_stop.load(Ordering::Relaxed) {
                let sample = collector.sample();
                if metrics_tx
                    .send(TuiMessage::Event(ConsoleEvent::from(sample)))
                    .is_err()
                {
                    break; // channel closed, TUI exited
                }
                std::thread::sleep(period);
            }
        }))
    };

    // Run the TUI event loop on the main thread
    let mut app = TuiApp::new(rx, config.player.clone(), config.export_dir.clone());
    let result = app.run().map_err(|e| anyhow::anyhow!("terminal error: {e}"));

    // Cancel the sampler on teardown. The reader thread may be blocked on
    // stdin and is left to die with the process.
    stop.store(true, Ordering::Relaxed);
    if let Some(handle) = sampler {
        let _ = handle.join();
    }

    result
}

/// Plain mode: print entries to stdout as they arrive, for piping.
fn run_plain(config: &AppConfig) -> Result<()> {
    let mut console = Console::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    append_and_print(&mut console, &mut out, "Console started", Severity::Success)?;
    append_and_print(&mut console, &mut out, "Waiting for output...", Severity::Info)?;

    for line in std::io::stdin().lock().lines() {
        let line = line.context("reading input stream")?;
        let event = parse_line(line, config.json);
        let is_log = matches!(event, ConsoleEvent::Log { .. });
        console.apply(event);
        // Metric and status events update the model silently; only log
        // entries produce output lines.
        if is_log {
            if let Some(entry) = console.last() {
                writeln!(out, "{}", entry.display_line())?;
            }
        }
    }

    append_and_print(&mut console, &mut out, "Input stream closed.", Severity::Info)?;

    if config.export_on_close {
        let name = Console::export_file_name(EXPORT_PREFIX, Utc::now());
        let path = config.export_dir.join(name);
        launchview_tui::write_lines(&path, console.export_lines())
            .with_context(|| format!("writing export to {}", path.display()))?;
        writeln!(out, "Logs exported to {}", path.display())?;
    }

    Ok(())
}

fn append_and_print(
    console: &mut Console,
    out: &mut impl Write,
    message: &str,
    severity: Severity,
) -> Result<()> {
    console.append(message, severity);
    if let Some(entry) = console.last() {
        writeln!(out, "{}", entry.display_line())?;
    }
    Ok(())
}
