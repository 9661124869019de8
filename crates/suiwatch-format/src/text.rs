//! Terminal dashboard rendering.

use std::io::Write;
use suiwatch_types::{DisplayPoint, FetchState, Quote, Timeframe};

use crate::{FormatError, Formatter};

/// Shown while the first fetch is in flight.
pub const LOADING_DATA: &str = "Loading Sui data...";
/// Title of the blocking error screen.
pub const LOAD_FAILED: &str = "Unable to load data";
/// Note shown under a blocking error.
pub const RATE_LIMIT_NOTE: &str =
    "CoinGecko's free API has strict rate limits.\nPlease wait a moment and try again.";
/// Shown in the chart area while a refresh is in flight.
pub const LOADING_CHART: &str = "Loading chart...";
/// Shown in the chart area when the series is empty.
pub const NO_CHART_DATA: &str = "No chart data available";
/// Attribution appended to the performance caption.
pub const ATTRIBUTION: &str = "Data by CoinGecko";

const PLACEHOLDER: &str = "--";
const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// What the dashboard shows for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    /// Nothing loaded yet and a fetch is running.
    Loading,
    /// Nothing loaded and the last fetch failed.
    Failed(&'a str),
    /// Header, selector and chart area.
    Dashboard(ChartArea),
}

/// Content of the chart area on the dashboard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartArea {
    /// A refresh is in flight.
    Loading,
    /// The series is empty.
    Empty,
    /// The series is drawn.
    Plot,
}

impl<'a> Screen<'a> {
    /// Selects the screen for a state.
    #[must_use]
    pub fn for_state(state: &'a FetchState) -> Self {
        if state.is_initial_load() {
            return Self::Loading;
        }
        if let Some(message) = state.blocking_error() {
            return Self::Failed(message);
        }

        let area = if state.loading {
            ChartArea::Loading
        } else if state.series.is_empty() {
            ChartArea::Empty
        } else {
            ChartArea::Plot
        };
        Self::Dashboard(area)
    }
}

/// Formats the price as `$` with four decimals, or `--` without a quote.
#[must_use]
pub fn format_price(quote: Option<&Quote>) -> String {
    quote.map_or_else(|| PLACEHOLDER.to_string(), |q| format!("${:.4}", q.price))
}

/// Formats the 24-hour change with an explicit sign, or `--` when unknown.
#[must_use]
pub fn format_change(quote: Option<&Quote>) -> String {
    quote.and_then(|q| q.change_24h).map_or_else(
        || PLACEHOLDER.to_string(),
        |change| {
            let sign = if change >= 0.0 { "+" } else { "" };
            format!("{sign}{change:.2}%")
        },
    )
}

/// Formats a chart axis price with three decimals.
#[must_use]
pub fn format_axis_price(price: f64) -> String {
    format!("${price:.3}")
}

/// Returns the footer caption, e.g. "7 day performance · Data by CoinGecko".
#[must_use]
pub fn performance_caption(timeframe: Timeframe) -> String {
    format!("{} performance · {ATTRIBUTION}", timeframe.caption())
}

/// Renders the timeframe selector with the current choice in brackets.
#[must_use]
pub fn timeframe_bar(selected: Timeframe) -> String {
    Timeframe::all()
        .iter()
        .map(|tf| {
            if *tf == selected {
                format!("[{}]", tf.label())
            } else {
                tf.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Renders prices as a single-row block chart at most `width` columns wide.
///
/// Longer series are sampled evenly. A flat series renders at mid height.
#[must_use]
pub fn sparkline(prices: &[f64], width: usize) -> String {
    if prices.is_empty() || width == 0 {
        return String::new();
    }

    let columns: Vec<f64> = if prices.len() <= width {
        prices.to_vec()
    } else {
        (0..width).map(|i| prices[i * prices.len() / width]).collect()
    };

    let (low, high) = columns
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(*p), hi.max(*p))
        });
    let span = high - low;
    let top = LEVELS.len() - 1;

    columns
        .iter()
        .map(|price| {
            if span <= 0.0 {
                LEVELS[LEVELS.len() / 2]
            } else {
                let level = ((price - low) / span * top as f64).round() as usize;
                LEVELS[level.min(top)]
            }
        })
        .collect()
}

/// Human-readable dashboard renderer.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    width: usize,
    retry_hint: Option<String>,
}

impl TextFormatter {
    /// Default chart width in columns.
    pub const DEFAULT_WIDTH: usize = 60;

    /// Creates a formatter with the default chart width and no retry hint.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            retry_hint: None,
        }
    }

    /// Sets the chart width in columns.
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the hint printed under the blocking error, e.g. how to retry.
    #[must_use]
    pub fn with_retry_hint(mut self, hint: impl Into<String>) -> Self {
        self.retry_hint = Some(hint.into());
        self
    }

    fn write_header<W: Write>(
        &self,
        state: &FetchState,
        writer: &mut W,
    ) -> Result<(), FormatError> {
        let quote = state.quote.as_ref();
        writeln!(writer, "SUI")?;
        writeln!(writer, "{}  {}", format_price(quote), format_change(quote))?;
        writeln!(writer)?;
        writeln!(writer, "{}", timeframe_bar(state.timeframe))?;
        Ok(())
    }

    fn write_chart<W: Write>(
        &self,
        series: &[DisplayPoint],
        writer: &mut W,
    ) -> Result<(), FormatError> {
        let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
        let high = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let low = prices.iter().copied().fold(f64::INFINITY, f64::min);

        writeln!(writer, "{:>10}", format_axis_price(high))?;
        writeln!(writer, "{:>10} {}", "", sparkline(&prices, self.width))?;
        writeln!(writer, "{:>10}", format_axis_price(low))?;

        if let (Some(first), Some(last)) = (series.first(), series.last()) {
            writeln!(writer, "{:>10} {} .. {}", "", first.time, last.time)?;
        }
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn write_series<W: Write + Send>(
        &self,
        timeframe: Timeframe,
        series: &[DisplayPoint],
        mut writer: W,
    ) -> Result<(), FormatError> {
        if series.is_empty() {
            writeln!(writer, "{NO_CHART_DATA}")?;
            return Ok(());
        }

        let label_width = series.iter().map(|p| p.time.len()).max().unwrap_or(0);
        for point in series {
            writeln!(writer, "{:<label_width$}  ${:.4}", point.time, point.price)?;
        }
        writeln!(writer)?;
        writeln!(writer, "{}", performance_caption(timeframe))?;
        Ok(())
    }

    fn write_state<W: Write + Send>(
        &self,
        state: &FetchState,
        mut writer: W,
    ) -> Result<(), FormatError> {
        match Screen::for_state(state) {
            Screen::Loading => writeln!(writer, "{LOADING_DATA}")?,
            Screen::Failed(message) => {
                writeln!(writer, "{LOAD_FAILED}")?;
                writeln!(writer, "{message}")?;
                writeln!(writer)?;
                writeln!(writer, "{RATE_LIMIT_NOTE}")?;
                if let Some(hint) = &self.retry_hint {
                    writeln!(writer)?;
                    writeln!(writer, "{hint}")?;
                }
            }
            Screen::Dashboard(area) => {
                self.write_header(state, &mut writer)?;
                writeln!(writer)?;
                match area {
                    ChartArea::Loading => writeln!(writer, "{LOADING_CHART}")?,
                    ChartArea::Empty => writeln!(writer, "{NO_CHART_DATA}")?,
                    ChartArea::Plot => self.write_chart(&state.series, &mut writer)?,
                }
                if let Some(message) = state.background_error() {
                    writeln!(writer)?;
                    writeln!(writer, "Refresh failed: {message}")?;
                }
                writeln!(writer)?;
                writeln!(writer, "{}", performance_caption(state.chart_timeframe()))?;
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}
