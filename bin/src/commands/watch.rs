//! Watch command implementation.
//!
//! Runs the view controller and redraws the dashboard on every state
//! transition. Commands are read line by line from stdin.

use crate::display::Settings;
use anyhow::{Context, Result};
use std::io::{BufRead, IsTerminal, Write};
use suiwatch_lib::prelude::*;
use tokio::sync::mpsc;

const COMMANDS_HELP: &str = "Commands: 1d 1w 1m 3m 1y all | r retry | q quit";
const RETRY_HINT: &str = "Type r and press Enter to try again.";
const CLEAR_SCREEN: &[u8] = b"\x1B[2J\x1B[H";

/// A line of input in watch mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchCommand {
    Select(Timeframe),
    Retry,
    Quit,
}

impl WatchCommand {
    /// Parses a command line. Returns None for blank or unknown input.
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "" => None,
            "q" | "quit" | "exit" => Some(Self::Quit),
            "r" | "retry" => Some(Self::Retry),
            other => other.parse().ok().map(Self::Select),
        }
    }
}

/// Reads lines on a dedicated thread and forwards them over a channel.
///
/// The channel closes at end of input or after a read error. A read that never
/// returns only parks this thread, so the runtime can still shut down.
fn spawn_line_reader<F, R>(open: F) -> mpsc::UnboundedReceiver<std::io::Result<String>>
where
    F: FnOnce() -> R + Send + 'static,
    R: BufRead,
{
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in open().lines() {
            let failed = line.is_err();
            if tx.send(line).is_err() || failed {
                break;
            }
        }
    });
    rx
}

/// Runs the live dashboard until `q`, Ctrl+C, or the controller closes.
pub(crate) async fn watch(settings: &Settings, config: ControllerConfig) -> Result<()> {
    let fetcher = settings.fetcher()?;
    let mut controller = ViewController::new(fetcher, config);
    let mut updates = controller.subscribe();

    let formatter = TextFormatter::new().with_retry_hint(RETRY_HINT);
    let clear = std::io::stdout().is_terminal();

    let mut lines = spawn_line_reader(|| std::io::stdin().lock());
    let mut stdin_open = true;
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let _initial = controller.start().await;

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                render(&formatter, &state, clear)?;
            }
            line = lines.recv(), if stdin_open => {
                let Some(line) = line else {
                    // Input closed; keep refreshing until interrupted.
                    stdin_open = false;
                    continue;
                };
                let line = line.context("Failed to read stdin")?;
                match WatchCommand::parse(&line) {
                    Some(WatchCommand::Quit) => break,
                    Some(WatchCommand::Retry) => {
                        let _ = controller.retry().await;
                    }
                    Some(WatchCommand::Select(timeframe)) => {
                        let _ = controller.select_timeframe(timeframe).await;
                    }
                    None if line.trim().is_empty() => {}
                    None => eprintln!("Unknown command: {}", line.trim()),
                }
            }
            _ = &mut shutdown => break,
        }
    }

    controller.teardown().await;
    Ok(())
}

fn render(formatter: &TextFormatter, state: &FetchState, clear: bool) -> Result<()> {
    let mut buffer = Vec::new();
    if clear {
        buffer.extend_from_slice(CLEAR_SCREEN);
    }
    formatter.write_state(state, &mut buffer)?;
    writeln!(buffer)?;
    writeln!(buffer, "{COMMANDS_HELP}")?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&buffer)?;
    stdout.flush()?;
    Ok(())
}
