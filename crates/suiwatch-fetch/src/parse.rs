//! JSON payload parsing for quote and history responses.

use serde::Deserialize;
use serde_json::Value;
use suiwatch_types::{Asset, Quote, RawSeriesPoint};
use thiserror::Error;

/// Errors that can occur while parsing upstream payloads.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Body is not the expected JSON shape.
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A history sample has a non-finite or out-of-range value.
    #[error("Invalid price sample at index {index}")]
    InvalidPoint {
        /// Position of the sample in the `prices` list.
        index: usize,
    },
}

/// History payload: `{ "prices": [[timestampMs, price], ...] }`.
#[derive(Debug, Deserialize)]
struct MarketChart {
    prices: Vec<(f64, f64)>,
}

/// Parses a `simple/price` payload into a quote.
///
/// Payload format: `{ "<id>": { "<currency>": price, "<currency>_24h_change": change } }`
///
/// Returns `Ok(None)` when the asset entry or its price is absent. A missing
/// or null change keeps the price and leaves the change unknown. Entries for
/// other assets are ignored whatever their shape.
///
/// # Errors
///
/// Returns an error if the body is not valid JSON.
pub fn parse_quote(body: &[u8], asset: &Asset) -> Result<Option<Quote>, ParseError> {
    let payload: Value = serde_json::from_slice(body)?;
    let fields = &payload[asset.id()];

    let Some(price) = fields[asset.vs_currency()].as_f64() else {
        return Ok(None);
    };

    Ok(Some(Quote {
        price,
        change_24h: fields[asset.change_key().as_str()].as_f64(),
    }))
}

/// Parses a `market_chart` payload into chronological series points.
///
/// # Errors
///
/// Returns an error if the body is malformed or a sample is not finite.
pub fn parse_series(body: &[u8]) -> Result<Vec<RawSeriesPoint>, ParseError> {
    let chart: MarketChart = serde_json::from_slice(body)?;

    chart
        .prices
        .into_iter()
        .enumerate()
        .map(|(index, (timestamp, price))| {
            to_point(timestamp, price).ok_or(ParseError::InvalidPoint { index })
        })
        .collect()
}

/// Converts a raw `[timestamp, price]` pair, rejecting unrepresentable values.
#[inline]
fn to_point(timestamp: f64, price: f64) -> Option<RawSeriesPoint> {
    if !timestamp.is_finite() || !price.is_finite() {
        return None;
    }
    // Saturating cast; the range check below rejects the clamped extremes.
    #[allow(clippy::cast_possible_truncation)]
    let timestamp_ms = timestamp as i64;
    let point = RawSeriesPoint::new(timestamp_ms, price);
    point.datetime().map(|_| point)
}
