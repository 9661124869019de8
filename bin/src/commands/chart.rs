//! Chart command implementation.
//!
//! Fetches the history for one timeframe, downsamples and labels it, and
//! writes the display series in the requested format.

use crate::display::{Settings, choose_timeframe, fetch_once, write_series};
use anyhow::Result;
use std::path::PathBuf;
use suiwatch_lib::prelude::*;

/// Fetches and writes the display series for a timeframe.
pub(crate) async fn chart(
    settings: &Settings,
    timeframe: Option<Timeframe>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let timeframe = match timeframe {
        Some(tf) => tf,
        None => choose_timeframe(settings.quiet)?,
    };

    let snapshot = fetch_once(settings, timeframe).await?;
    let series = build_display_series(&snapshot.series, timeframe, settings.budget);
    tracing::info!(
        %timeframe,
        raw = snapshot.series.len(),
        points = series.len(),
        "series ready"
    );

    write_series(format, timeframe, &series, output.as_deref())?;

    if let Some(path) = output.filter(|_| !settings.quiet) {
        println!("Output written to: {}", path.display());
    }
    Ok(())
}
