//! Output formatters for the suiwatch price dashboard.
//!
//! - [`TextFormatter`] - Terminal dashboard and series table
//! - [`CsvFormatter`] - CSV format
//! - [`JsonFormatter`] - JSON array or NDJSON format

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/suiwatch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod text;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use text::{
    ATTRIBUTION, ChartArea, LOAD_FAILED, LOADING_CHART, LOADING_DATA, NO_CHART_DATA,
    RATE_LIMIT_NOTE, Screen, TextFormatter, format_axis_price, format_change, format_price,
    performance_caption, sparkline, timeframe_bar,
};
