//! Quote and price series representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current price and 24-hour change for the tracked asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Current price in the quote currency.
    pub price: f64,
    /// 24-hour change in percent (signed), when upstream reported one.
    pub change_24h: Option<f64>,
}

impl Quote {
    /// Creates a new quote.
    #[must_use]
    pub const fn new(price: f64, change_24h: f64) -> Self {
        Self {
            price,
            change_24h: Some(change_24h),
        }
    }

    /// Creates a quote whose 24-hour change is unknown.
    #[must_use]
    pub const fn without_change(price: f64) -> Self {
        Self {
            price,
            change_24h: None,
        }
    }

    /// Returns the direction of the 24-hour move, if the change is known.
    ///
    /// A flat (zero) change counts as up.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.change_24h.map(|change| {
            if change >= 0.0 {
                Direction::Up
            } else {
                Direction::Down
            }
        })
    }
}

/// Direction of a price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Non-negative change.
    Up,
    /// Negative change.
    Down,
}

/// A single historical price sample as returned upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSeriesPoint {
    /// Sample time in epoch milliseconds.
    pub timestamp_ms: i64,
    /// Price at that time.
    pub price: f64,
}

impl RawSeriesPoint {
    /// Creates a new series point.
    #[must_use]
    pub const fn new(timestamp_ms: i64, price: f64) -> Self {
        Self {
            timestamp_ms,
            price,
        }
    }

    /// Returns the sample time as a UTC datetime, if representable.
    #[must_use]
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_ms)
    }
}

/// A labeled point ready for display on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayPoint {
    /// Axis label for this point.
    pub time: String,
    /// Price at that time.
    pub price: f64,
}

impl DisplayPoint {
    /// Creates a new display point.
    #[must_use]
    pub fn new(time: impl Into<String>, price: f64) -> Self {
        Self {
            time: time.into(),
            price,
        }
    }
}

/// Normalized result of one fetch cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketSnapshot {
    /// Current quote, absent when the payload did not carry the asset.
    pub quote: Option<Quote>,
    /// Chronological price history.
    pub series: Vec<RawSeriesPoint>,
}

impl MarketSnapshot {
    /// Creates a new snapshot.
    #[must_use]
    pub const fn new(quote: Option<Quote>, series: Vec<RawSeriesPoint>) -> Self {
        Self { quote, series }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_quote_direction() {
        assert_eq!(Quote::new(1.0, 2.5).direction(), Some(Direction::Up));
        assert_eq!(Quote::new(1.0, 0.0).direction(), Some(Direction::Up));
        assert_eq!(Quote::new(1.0, -0.01).direction(), Some(Direction::Down));
        assert_eq!(Quote::without_change(1.0).direction(), None);
    }

    #[test]
    fn test_quote_fields() {
        let quote = Quote::new(1.2345, -3.21);
        assert_relative_eq!(quote.price, 1.2345);
        assert_relative_eq!(quote.change_24h.unwrap_or_default(), -3.21);

        let quote = Quote::without_change(0.98);
        assert_relative_eq!(quote.price, 0.98);
        assert!(quote.change_24h.is_none());
    }

    #[test]
    fn test_raw_point_datetime() {
        // 2024-03-14T15:00:00Z
        let point = RawSeriesPoint::new(1_710_428_400_000, 1.5);
        let dt = point.datetime().unwrap();
        assert_relative_eq!(point.price, 1.5);

        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 3);
        assert_eq!(dt.day(), 14);
        assert_eq!(dt.hour(), 15);
    }

    #[test]
    fn test_raw_point_out_of_range() {
        let point = RawSeriesPoint::new(i64::MAX, 1.0);
        assert!(point.datetime().is_none());
    }
}
