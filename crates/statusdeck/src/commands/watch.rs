use std::io::BufRead;
use std::sync::Arc;

use clap::ArgMatches;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use statusdeck_core::{HttpTransport, Orchestrator, RefreshScheduler, UiSurface};

use super::helpers::{apply_cli_overrides, load_config_with_warning};
use crate::terminal::TerminalSurface;

/// One line typed while the dashboard is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchInput {
    Refresh,
    SetInterval(i64),
    Quit,
    Unknown,
}

fn parse_input(line: &str) -> Option<WatchInput> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let input = match line.to_ascii_lowercase().as_str() {
        "r" | "refresh" => WatchInput::Refresh,
        "q" | "quit" | "exit" => WatchInput::Quit,
        other => match other.parse::<i64>() {
            Ok(secs) => WatchInput::SetInterval(secs),
            Err(_) => WatchInput::Unknown,
        },
    };
    Some(input)
}

pub(crate) async fn handle_watch_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = apply_cli_overrides(load_config_with_warning(), matches)?;
    let interval = i64::try_from(config.refresh.interval_secs()).unwrap_or(i64::MAX);
    info!(event = "cli.watch_started", interval_secs = interval);

    let surface = Arc::new(TerminalSurface::new(config.display.color(), interval));
    let orchestrator = Orchestrator::from_config(&config, surface.clone()).map_err(|e| {
        error!(event = "cli.watch_failed", error = %e);
        e
    })?;
    let scheduler = RefreshScheduler::new(Arc::new(orchestrator));

    surface.present(&scheduler.orchestrator().dashboard());
    scheduler.start(interval);

    let mut input = spawn_stdin_reader();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            line = input.recv(), if stdin_open => {
                let Some(line) = line else {
                    debug!(event = "cli.watch.stdin_closed");
                    stdin_open = false;
                    continue;
                };
                match parse_input(&line) {
                    Some(WatchInput::Quit) => break,
                    Some(command) => handle_input(command, &scheduler, &surface),
                    None => {}
                }
            }
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    warn!(event = "cli.watch.signal_failed", error = %e);
                }
                break;
            }
        }
    }

    scheduler.shutdown();
    info!(event = "cli.watch_completed");
    Ok(())
}

fn handle_input(
    command: WatchInput,
    scheduler: &RefreshScheduler<HttpTransport>,
    surface: &TerminalSurface,
) {
    match command {
        WatchInput::Refresh => {
            if scheduler.orchestrator().is_loading() {
                debug!(event = "cli.watch.refresh_ignored", reason = "loading");
                return;
            }
            scheduler.trigger();
        }
        WatchInput::SetInterval(secs) => {
            scheduler.set_interval(secs);
            surface.set_interval(secs);
            surface.present(&scheduler.orchestrator().dashboard());
        }
        WatchInput::Unknown => {
            eprintln!("Unrecognized input. Type r, a number of seconds, or q.");
        }
        WatchInput::Quit => {}
    }
}

/// Read stdin lines on a plain thread.
///
/// A blocking stdin read cannot be cancelled, so it must not hold up runtime
/// shutdown. The thread is never joined and ends with the process.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(event = "cli.watch.stdin_read_failed", error = %e);
                    break;
                }
            }
        }
    });
    rx
}
