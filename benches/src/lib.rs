//! Benchmark fixtures for suiwatch.

use serde_json::json;
use suiwatch_types::{RawSeriesPoint, Timeframe};

/// 2024-01-01T00:00:00Z in epoch milliseconds.
pub const EPOCH_MS: i64 = 1_704_067_200_000;

/// Sample count and spacing resembling the upstream history for a timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesShape {
    /// Number of samples.
    pub len: usize,
    /// Spacing between samples in milliseconds.
    pub step_ms: i64,
}

impl SeriesShape {
    /// Creates a shape of `len` samples spaced `step_ms` apart.
    pub const fn new(len: usize, step_ms: i64) -> Self {
        Self { len, step_ms }
    }

    /// Returns the typical shape for `timeframe`: five-minute samples for a
    /// day, hourly up to 90 days, daily beyond.
    pub const fn for_timeframe(timeframe: Timeframe) -> Self {
        const MINUTE: i64 = 60_000;
        const HOUR: i64 = 60 * MINUTE;
        const DAY: i64 = 24 * HOUR;

        match timeframe {
            Timeframe::IntradayDay => Self::new(288, 5 * MINUTE),
            Timeframe::Week => Self::new(168, HOUR),
            Timeframe::Month => Self::new(720, HOUR),
            Timeframe::Quarter => Self::new(2_160, HOUR),
            Timeframe::Year => Self::new(365, DAY),
            Timeframe::All => Self::new(1_000, DAY),
        }
    }
}

/// Generates a deterministic oscillating price series.
pub fn synthetic_series(shape: SeriesShape) -> Vec<RawSeriesPoint> {
    (0..shape.len)
        .map(|i| {
            let t = i as f64;
            let price = 1.5 + 0.25 * (t / 17.0).sin() + 0.05 * (t / 3.0).cos();
            RawSeriesPoint::new(EPOCH_MS + i as i64 * shape.step_ms, price)
        })
        .collect()
}

/// Serializes a series as an upstream `market_chart` payload.
pub fn market_chart_payload(series: &[RawSeriesPoint]) -> Vec<u8> {
    let prices: Vec<_> = series
        .iter()
        .map(|p| json!([p.timestamp_ms, p.price]))
        .collect();
    json!({ "prices": prices }).to_string().into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_series_shape() {
        let shape = SeriesShape::for_timeframe(Timeframe::Month);
        let series = synthetic_series(shape);

        assert_eq!(series.len(), 720);
        assert_eq!(series[1].timestamp_ms - series[0].timestamp_ms, 3_600_000);
        assert!(series.iter().all(|p| p.price > 1.0 && p.price < 2.0));
    }

    #[test]
    fn test_shapes_cover_timeframe_span() {
        let shape = SeriesShape::for_timeframe(Timeframe::IntradayDay);
        assert_eq!(shape, SeriesShape::new(288, 300_000));

        let shape = SeriesShape::for_timeframe(Timeframe::Year);
        assert_eq!(shape.len as i64 * shape.step_ms, 365 * 86_400_000);
    }

    #[test]
    fn test_payload_shape() {
        let series = synthetic_series(SeriesShape::new(2, 1_000));
        let payload: serde_json::Value =
            serde_json::from_slice(&market_chart_payload(&series)).unwrap();

        assert_eq!(payload["prices"].as_array().unwrap().len(), 2);
        assert_eq!(payload["prices"][1][0], EPOCH_MS + 1_000);
    }
}
