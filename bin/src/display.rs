//! Display utilities and shared helpers for the suiwatch CLI.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::Select;
use std::fs::File;
use std::io::{BufWriter, IsTerminal, Write};
use std::path::Path;
use std::time::Duration;
use suiwatch_lib::prelude::*;
use suiwatch_lib::{LOAD_FAILED, LOADING_DATA, RATE_LIMIT_NOTE};

/// Settings shared by all commands.
pub(crate) struct Settings {
    pub(crate) client: ClientConfig,
    pub(crate) budget: usize,
    pub(crate) quiet: bool,
}

impl Settings {
    /// Creates a fetcher from the client settings.
    pub(crate) fn fetcher(&self) -> Result<Fetcher> {
        Fetcher::new(self.client.clone()).context("Failed to create HTTP client")
    }
}

/// Creates a spinner, hidden in quiet mode.
pub(crate) fn spinner(quiet: bool, message: &str) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Fetches one snapshot for `timeframe` behind a spinner.
///
/// On failure the rate-limit note is printed to stderr unless quiet.
pub(crate) async fn fetch_once(
    settings: &Settings,
    timeframe: Timeframe,
) -> Result<MarketSnapshot> {
    let fetcher = settings.fetcher()?;
    let progress = spinner(settings.quiet, LOADING_DATA);

    match fetcher.fetch(timeframe).await {
        Ok(snapshot) => {
            progress.finish_and_clear();
            Ok(snapshot)
        }
        Err(err) => {
            progress.finish_and_clear();
            if !settings.quiet {
                eprintln!("{RATE_LIMIT_NOTE}\n");
            }
            Err(err).context(LOAD_FAILED)
        }
    }
}

/// Asks for a timeframe on an interactive terminal, otherwise returns the default.
pub(crate) fn choose_timeframe(quiet: bool) -> Result<Timeframe> {
    if quiet || !std::io::stdin().is_terminal() {
        return Ok(Timeframe::default());
    }

    let options: Vec<String> = Timeframe::all()
        .iter()
        .map(|tf| format!("{:<4} {}", tf.label(), tf.caption()))
        .collect();
    let default_index = Timeframe::all()
        .iter()
        .position(|tf| *tf == Timeframe::default())
        .unwrap_or(0);

    let selection = Select::new("Select a timeframe:", options)
        .with_starting_cursor(default_index)
        .raw_prompt()
        .context("Timeframe selection cancelled")?;

    Timeframe::all()
        .get(selection.index)
        .copied()
        .context("Invalid timeframe selection")
}

/// Writes the display series to a file or stdout in the given format.
pub(crate) fn write_series(
    format: OutputFormat,
    timeframe: Timeframe,
    series: &[DisplayPoint],
    output: Option<&Path>,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_series_to(format, timeframe, series, &mut writer)?;
            writer.flush()?;
        }
        None => write_series_to(format, timeframe, series, std::io::stdout())?,
    }
    Ok(())
}

fn write_series_to<W: Write + Send>(
    format: OutputFormat,
    timeframe: Timeframe,
    series: &[DisplayPoint],
    writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Text => TextFormatter::new().write_series(timeframe, series, writer)?,
        OutputFormat::Csv => CsvFormatter::new().write_series(timeframe, series, writer)?,
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_series(timeframe, series, writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_series(timeframe, series, writer)?,
    }
    Ok(())
}
