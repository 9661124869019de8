//! JSON output format.

use serde::Serialize;
use std::io::Write;
use suiwatch_types::{Direction, DisplayPoint, FetchState, Quote, Timeframe, ViewPhase};

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

/// Serialized view of the dashboard state.
#[derive(Serialize)]
struct StateRecord<'a> {
    timeframe: Timeframe,
    series_timeframe: Option<Timeframe>,
    phase: ViewPhase,
    loading: bool,
    quote: Option<&'a Quote>,
    direction: Option<Direction>,
    error: Option<&'a str>,
    series: &'a [DisplayPoint],
}

impl<'a> From<&'a FetchState> for StateRecord<'a> {
    fn from(state: &'a FetchState) -> Self {
        Self {
            timeframe: state.timeframe,
            series_timeframe: state.series_timeframe,
            phase: state.phase(),
            loading: state.loading,
            quote: state.quote.as_ref(),
            direction: state.quote.as_ref().and_then(Quote::direction),
            error: state.error.as_deref(),
            series: &state.series,
        }
    }
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_value<W: Write, T: Serialize + ?Sized>(
        &self,
        value: &T,
        writer: &mut W,
    ) -> Result<(), FormatError> {
        if self.pretty && self.style == JsonStyle::Array {
            serde_json::to_writer_pretty(&mut *writer, value)?;
        } else {
            serde_json::to_writer(&mut *writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_series<W: Write + Send>(
        &self,
        _timeframe: Timeframe,
        series: &[DisplayPoint],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => self.write_value(series, &mut writer)?,
            JsonStyle::Ndjson => {
                for point in series {
                    self.write_value(point, &mut writer)?;
                }
            }
        }
        Ok(())
    }

    /// Writes the state as a single object. In NDJSON style this is one line,
    /// so successive states from a watch session form a valid stream.
    fn write_state<W: Write + Send>(
        &self,
        state: &FetchState,
        mut writer: W,
    ) -> Result<(), FormatError> {
        self.write_value(&StateRecord::from(state), &mut writer)
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn series() -> Vec<DisplayPoint> {
        vec![
            DisplayPoint::new("3 PM", 1.2345),
            DisplayPoint::new("4 PM", 1.25),
        ]
    }

    fn write_series(formatter: &JsonFormatter) -> String {
        let mut output = Cursor::new(Vec::new());
        formatter
            .write_series(Timeframe::IntradayDay, &series(), &mut output)
            .unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_json_array() {
        let result = write_series(&JsonFormatter::new());

        assert!(result.starts_with('['));
        assert!(result.contains(r#"{"time":"3 PM","price":1.2345}"#));
        assert_eq!(result.lines().count(), 1);
    }

    #[test]
    fn test_ndjson() {
        let result = write_series(&JsonFormatter::ndjson());

        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('{'));
        assert_eq!(lines[1], r#"{"time":"4 PM","price":1.25}"#);
    }

    #[test]
    fn test_pretty_json() {
        let result = write_series(&JsonFormatter::new().with_pretty(true));

        assert!(result.contains('\n'));
        assert!(result.contains("  "));
    }

    #[test]
    fn test_state_record() {
        let mut state = FetchState::new(Timeframe::Year);
        state.apply_success(Some(Quote::new(1.2345, -3.21)), series());

        let mut output = Cursor::new(Vec::new());
        JsonFormatter::new().write_state(&state, &mut output).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output.into_inner()).unwrap();

        assert_eq!(value["timeframe"], "1y");
        assert_eq!(value["series_timeframe"], "1y");
        assert_eq!(value["phase"], "ready");
        assert_eq!(value["direction"], "down");
        assert_eq!(value["quote"]["price"], 1.2345);
        assert_eq!(value["series"].as_array().unwrap().len(), 2);
        assert!(value["error"].is_null());
    }
}
