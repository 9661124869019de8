//! Series downsampling and axis labels for the suiwatch price dashboard.
//!
//! - [`downsample`] - Fixed-stride reduction to a point budget
//! - [`format_label`] - Timeframe-dependent axis labels
//! - [`build_display_series`] - Both steps applied to upstream history

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/suiwatch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod downsample;
mod label;
mod series;

pub use downsample::{DEFAULT_POINT_BUDGET, downsample, stride_for};
pub use label::{LabelPolicy, format_label, format_label_in};
pub use series::{build_display_series, build_display_series_in};
