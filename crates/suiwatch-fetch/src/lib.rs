//! HTTP client and quote fetching for the suiwatch price dashboard.
//!
//! This crate provides the upstream data pipeline:
//!
//! - [`url`] - Constructs CoinGecko request URLs
//! - [`HttpClient`] - reqwest-backed [`Transport`]
//! - [`parse_quote`] / [`parse_series`] - Payload parsing
//! - [`Fetcher`] - Sequential quote + history fetch, exposed as a [`MarketSource`]

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/suiwatch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod fetcher;
mod parse;
pub mod url;

pub use client::{ClientConfig, HttpClient, HttpResponse, Transport, TransportError};
pub use fetcher::{Fetcher, MarketSource};
pub use parse::{ParseError, parse_quote, parse_series};
