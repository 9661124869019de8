//! Live SUI/USD price dashboard library.
//!
//! This is a facade crate that re-exports functionality from the suiwatch
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use suiwatch_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = Fetcher::with_defaults()?;
//!     let snapshot = fetcher.fetch(Timeframe::Month).await?;
//!     let series = build_display_series(&snapshot.series, Timeframe::Month, DEFAULT_POINT_BUDGET);
//!
//!     JsonFormatter::new().write_series(Timeframe::Month, &series, std::io::stdout())?;
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/suiwatch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use suiwatch_types::*;

#[cfg(feature = "fetch")]
pub use suiwatch_fetch::{
    ClientConfig, Fetcher, HttpClient, HttpResponse, MarketSource, ParseError, Transport,
    TransportError, parse_quote, parse_series,
};

#[cfg(feature = "chart")]
pub use suiwatch_chart::{
    DEFAULT_POINT_BUDGET, LabelPolicy, build_display_series, build_display_series_in, downsample,
    format_label, format_label_in, stride_for,
};

#[cfg(feature = "view")]
pub use suiwatch_view::{ControllerConfig, FetchHandle, ViewController};

#[cfg(feature = "format")]
pub use suiwatch_format::{
    ATTRIBUTION, ChartArea, CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle,
    LOAD_FAILED, LOADING_CHART, LOADING_DATA, NO_CHART_DATA, OutputFormat, RATE_LIMIT_NOTE, Screen,
    TextFormatter, format_axis_price, format_change, format_price, performance_caption, sparkline,
    timeframe_bar,
};

/// Prelude module for convenient imports.
///
/// ```
/// use suiwatch_lib::prelude::*;
/// ```
pub mod prelude {
    pub use suiwatch_types::{
        Asset, DisplayPoint, FetchError, FetchState, MarketSnapshot, Quote, RawSeriesPoint,
        Timeframe, ViewPhase,
    };

    #[cfg(feature = "fetch")]
    pub use suiwatch_fetch::{ClientConfig, Fetcher, MarketSource};

    #[cfg(feature = "chart")]
    pub use suiwatch_chart::{DEFAULT_POINT_BUDGET, build_display_series, downsample};

    #[cfg(feature = "view")]
    pub use suiwatch_view::{ControllerConfig, ViewController};

    #[cfg(feature = "format")]
    pub use suiwatch_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat, TextFormatter};
}
