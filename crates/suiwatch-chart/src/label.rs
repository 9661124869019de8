//! Axis label formatting.

use chrono::{DateTime, Local, TimeZone};
use suiwatch_types::Timeframe;

/// Date-format policy used for axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelPolicy {
    /// Hour of day on a 12-hour clock, e.g. "3 PM".
    HourOfDay,
    /// Abbreviated month and day of month, e.g. "Mar 14".
    MonthDay,
    /// Abbreviated month and two-digit year, e.g. "Mar 24".
    MonthYear,
}

impl LabelPolicy {
    /// Returns the policy for a timeframe.
    #[must_use]
    pub const fn for_timeframe(timeframe: Timeframe) -> Self {
        match timeframe {
            Timeframe::IntradayDay => Self::HourOfDay,
            Timeframe::Week | Timeframe::Month => Self::MonthDay,
            Timeframe::Quarter | Timeframe::Year | Timeframe::All => Self::MonthYear,
        }
    }

    /// Returns the chrono format pattern for this policy.
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        match self {
            Self::HourOfDay => "%-I %p",
            Self::MonthDay => "%b %-d",
            Self::MonthYear => "%b %y",
        }
    }
}

/// Formats a timestamp as an axis label in the local time zone.
#[must_use]
pub fn format_label(timestamp_ms: i64, timeframe: Timeframe) -> String {
    format_label_in(timestamp_ms, timeframe, &Local)
}

/// Formats a timestamp as an axis label in the given time zone.
///
/// Timestamps outside chrono's range are rendered as the raw millisecond value.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use suiwatch_chart::format_label_in;
/// use suiwatch_types::Timeframe;
///
/// // 2024-03-14T15:00:00Z
/// let ts = 1_710_428_400_000;
/// assert_eq!(format_label_in(ts, Timeframe::IntradayDay, &Utc), "3 PM");
/// assert_eq!(format_label_in(ts, Timeframe::Week, &Utc), "Mar 14");
/// assert_eq!(format_label_in(ts, Timeframe::Year, &Utc), "Mar 24");
/// ```
#[must_use]
pub fn format_label_in<Tz>(timestamp_ms: i64, timeframe: Timeframe, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(utc) = DateTime::from_timestamp_millis(timestamp_ms) else {
        return timestamp_ms.to_string();
    };

    utc.with_timezone(tz)
        .format(LabelPolicy::for_timeframe(timeframe).pattern())
        .to_string()
}
