//! View state controller for the suiwatch price dashboard.
//!
//! - [`ViewController`] - Dispatches fetches and applies their results
//! - [`ControllerConfig`] - Poll interval, point budget and startup timeframe

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/suiwatch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;

pub use config::ControllerConfig;
pub use controller::{FetchHandle, ViewController};
