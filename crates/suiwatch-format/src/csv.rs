//! CSV output format.

use std::borrow::Cow;
use std::io::Write;
use suiwatch_types::{DisplayPoint, FetchState, Timeframe};

use crate::{FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Quotes a field if it contains the delimiter, a quote or a line break.
    fn escape<'a>(&self, field: &'a str) -> Cow<'a, str> {
        if field.contains([self.delimiter, '"', '\n', '\r']) {
            Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(field)
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn write_series<W: Write + Send>(
        &self,
        _timeframe: Timeframe,
        series: &[DisplayPoint],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "time{d}price")?;
        }

        for point in series {
            writeln!(writer, "{}{d}{}", self.escape(&point.time), point.price)?;
        }

        Ok(())
    }

    fn write_state<W: Write + Send>(
        &self,
        state: &FetchState,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "timeframe{d}phase{d}price{d}change_24h{d}points{d}error"
            )?;
        }

        let (price, change) = state.quote.map_or((String::new(), String::new()), |q| {
            (
                q.price.to_string(),
                q.change_24h.map(|c| c.to_string()).unwrap_or_default(),
            )
        });
        writeln!(
            writer,
            "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
            state.timeframe,
            state.phase(),
            price,
            change,
            state.series.len(),
            self.escape(state.error.as_deref().unwrap_or_default()),
        )?;

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}
