//! Core types for the suiwatch price dashboard.
//!
//! This crate provides the fundamental data structures used throughout suiwatch:
//!
//! - [`Quote`] - Current price with its 24-hour change
//! - [`RawSeriesPoint`] - Historical price sample as returned upstream
//! - [`DisplayPoint`] - Labeled point ready for the chart
//! - [`Timeframe`] - Selectable chart window
//! - [`Asset`] - The tracked asset and its quote currency
//! - [`FetchState`] - View state consumed by the presentation layer

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/suiwatch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod asset;
mod error;
mod quote;
mod state;
mod timeframe;

pub use asset::Asset;
pub use error::{CHART_UNAVAILABLE_MESSAGE, FetchError, RATE_LIMITED_MESSAGE};
pub use quote::{Direction, DisplayPoint, MarketSnapshot, Quote, RawSeriesPoint};
pub use state::{FetchState, ViewPhase};
pub use timeframe::{Timeframe, TimeframeParseError};
