//! Raw history to display series.

use chrono::{Local, TimeZone};
use suiwatch_types::{DisplayPoint, RawSeriesPoint, Timeframe};

use crate::{downsample, format_label_in};

/// Downsamples `raw` to `budget` and labels each kept point in the local zone.
#[must_use]
pub fn build_display_series(
    raw: &[RawSeriesPoint],
    timeframe: Timeframe,
    budget: usize,
) -> Vec<DisplayPoint> {
    build_display_series_in(raw, timeframe, budget, &Local)
}

/// Downsamples `raw` to `budget` and labels each kept point in `tz`.
#[must_use]
pub fn build_display_series_in<Tz>(
    raw: &[RawSeriesPoint],
    timeframe: Timeframe,
    budget: usize,
    tz: &Tz,
) -> Vec<DisplayPoint>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    downsample(raw, budget)
        .into_iter()
        .map(|point| {
            DisplayPoint::new(
                format_label_in(point.timestamp_ms, timeframe, tz),
                point.price,
            )
        })
        .collect()
}
