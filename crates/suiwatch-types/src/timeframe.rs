//! Chart timeframe definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Window of price history shown on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    /// Last 24 hours.
    #[serde(rename = "1d")]
    IntradayDay,
    /// Last 7 days.
    #[default]
    #[serde(rename = "1w")]
    Week,
    /// Last 30 days.
    #[serde(rename = "1m")]
    Month,
    /// Last 90 days.
    #[serde(rename = "3m")]
    Quarter,
    /// Last 365 days.
    #[serde(rename = "1y")]
    Year,
    /// Full available history.
    All,
}

impl Timeframe {
    /// Returns the upstream `days` query parameter for this timeframe.
    #[must_use]
    pub const fn days_param(&self) -> &'static str {
        match self {
            Self::IntradayDay => "1",
            Self::Week => "7",
            Self::Month => "30",
            Self::Quarter => "90",
            Self::Year => "365",
            Self::All => "max",
        }
    }

    /// Returns the number of days covered, or None for the full history.
    #[must_use]
    pub const fn days(&self) -> Option<u32> {
        match self {
            Self::IntradayDay => Some(1),
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::Quarter => Some(90),
            Self::Year => Some(365),
            Self::All => None,
        }
    }

    /// Returns the short selector label (e.g. "24H", "1W").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::IntradayDay => "24H",
            Self::Week => "1W",
            Self::Month => "1M",
            Self::Quarter => "3M",
            Self::Year => "1Y",
            Self::All => "ALL",
        }
    }

    /// Returns the caption used in the performance footer.
    #[must_use]
    pub const fn caption(&self) -> &'static str {
        match self {
            Self::IntradayDay => "24 hour",
            Self::Week => "7 day",
            Self::Month => "1 month",
            Self::Quarter => "3 month",
            Self::Year => "1 year",
            Self::All => "All time",
        }
    }

    /// Returns the timeframe as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IntradayDay => "1d",
            Self::Week => "1w",
            Self::Month => "1m",
            Self::Quarter => "3m",
            Self::Year => "1y",
            Self::All => "all",
        }
    }

    /// Returns all timeframes in selector order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::IntradayDay,
            Self::Week,
            Self::Month,
            Self::Quarter,
            Self::Year,
            Self::All,
        ]
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1d" | "1" | "24h" | "day" | "intraday" => Ok(Self::IntradayDay),
            "1w" | "7" | "7d" | "week" => Ok(Self::Week),
            "1m" | "30" | "30d" | "month" => Ok(Self::Month),
            "3m" | "90" | "90d" | "quarter" => Ok(Self::Quarter),
            "1y" | "365" | "365d" | "year" => Ok(Self::Year),
            "all" | "max" => Ok(Self::All),
            _ => Err(TimeframeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid timeframe string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeframeParseError(String);

impl std::fmt::Display for TimeframeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid timeframe '{}', expected one of: 1d, 1w, 1m, 3m, 1y, all",
            self.0
        )
    }
}

impl std::error::Error for TimeframeParseError {}
