//! View state record and its phases.

use serde::{Deserialize, Serialize};

use crate::{DisplayPoint, FetchError, Quote, Timeframe};

/// Phase of the view, derived from the state fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPhase {
    /// Nothing has been dispatched yet.
    Idle,
    /// A fetch for the current timeframe is in flight.
    Loading,
    /// Last fetch succeeded.
    Ready,
    /// Last fetch failed and no quote has ever been obtained.
    ErrorNoData,
    /// Last fetch failed but an earlier quote is still shown.
    ReadyStaleError,
}

impl ViewPhase {
    /// Returns the phase as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::ErrorNoData => "error_no_data",
            Self::ReadyStaleError => "ready_stale_error",
        }
    }
}

impl std::fmt::Display for ViewPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the presentation layer needs to render the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchState {
    /// Last known quote.
    pub quote: Option<Quote>,
    /// Display-ready price history for `series_timeframe`.
    pub series: Vec<DisplayPoint>,
    /// Timeframe the shown series was fetched for. Lags `timeframe` until a
    /// fetch for the new selection succeeds.
    #[serde(default)]
    pub series_timeframe: Option<Timeframe>,
    /// Whether the latest dispatched fetch is still in flight.
    pub loading: bool,
    /// User-facing message of the last failure.
    pub error: Option<String>,
    /// Selected timeframe.
    pub timeframe: Timeframe,
    /// Whether any fetch has been dispatched.
    #[serde(skip)]
    started: bool,
}

impl FetchState {
    /// Creates an idle state for the given timeframe.
    #[must_use]
    pub const fn new(timeframe: Timeframe) -> Self {
        Self {
            quote: None,
            series: Vec::new(),
            series_timeframe: None,
            loading: false,
            error: None,
            timeframe,
            started: false,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> ViewPhase {
        if self.loading {
            return ViewPhase::Loading;
        }
        match (&self.error, &self.quote) {
            (Some(_), None) => ViewPhase::ErrorNoData,
            (Some(_), Some(_)) => ViewPhase::ReadyStaleError,
            (None, _) if self.started => ViewPhase::Ready,
            (None, _) => ViewPhase::Idle,
        }
    }

    /// Returns the error when it should block the dashboard (no quote yet).
    #[must_use]
    pub fn blocking_error(&self) -> Option<&str> {
        match self.phase() {
            ViewPhase::ErrorNoData => self.error.as_deref(),
            _ => None,
        }
    }

    /// Returns the error of a failed background refresh while stale data is shown.
    #[must_use]
    pub fn background_error(&self) -> Option<&str> {
        match self.phase() {
            ViewPhase::ReadyStaleError => self.error.as_deref(),
            _ => None,
        }
    }

    /// Returns the timeframe that describes the shown series.
    #[must_use]
    pub fn chart_timeframe(&self) -> Timeframe {
        self.series_timeframe.unwrap_or(self.timeframe)
    }

    /// Returns true while nothing has been loaded and a fetch is running.
    #[must_use]
    pub const fn is_initial_load(&self) -> bool {
        self.loading && self.quote.is_none()
    }

    /// Marks the start of a fetch: sets loading and clears the previous error.
    pub fn begin_fetch(&mut self) {
        self.started = true;
        self.loading = true;
        self.error = None;
    }

    /// Applies a successful fetch for the selected timeframe.
    ///
    /// The quote is only replaced when the payload carried one.
    pub fn apply_success(&mut self, quote: Option<Quote>, series: Vec<DisplayPoint>) {
        if let Some(quote) = quote {
            self.quote = Some(quote);
        }
        self.series = series;
        self.series_timeframe = Some(self.timeframe);
        self.error = None;
        self.loading = false;
        self.started = true;
    }

    /// Applies a failed fetch, keeping the last good quote and series.
    pub fn apply_failure(&mut self, error: &FetchError) {
        self.error = Some(error.to_string());
        self.loading = false;
        self.started = true;
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new(Timeframe::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RATE_LIMITED_MESSAGE;

    #[test]
    fn test_new_state_is_idle() {
        let state = FetchState::new(Timeframe::Week);
        assert_eq!(state.phase(), ViewPhase::Idle);
        assert!(state.series.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_begin_fetch_enters_loading() {
        let mut state = FetchState::default();
        state.begin_fetch();
        assert_eq!(state.phase(), ViewPhase::Loading);
        assert!(state.is_initial_load());
    }

    #[test]
    fn test_success_then_ready() {
        let mut state = FetchState::default();
        state.begin_fetch();
        state.apply_success(
            Some(Quote::new(1.2345, -3.21)),
            vec![DisplayPoint::new("Mar 14", 1.2)],
        );

        assert_eq!(state.phase(), ViewPhase::Ready);
        assert_eq!(state.quote, Some(Quote::new(1.2345, -3.21)));
        assert_eq!(state.series.len(), 1);
    }

    #[test]
    fn test_success_without_quote_keeps_previous() {
        let mut state = FetchState::default();
        state.apply_success(Some(Quote::new(2.0, 1.0)), vec![]);
        state.begin_fetch();
        state.apply_success(None, vec![DisplayPoint::new("3 PM", 2.1)]);

        assert_eq!(state.quote, Some(Quote::new(2.0, 1.0)));
        assert_eq!(state.series.len(), 1);
    }

    #[test]
    fn test_failure_without_quote_blocks() {
        let mut state = FetchState::default();
        state.begin_fetch();
        state.apply_failure(&FetchError::RateLimited { status: 429 });

        assert_eq!(state.phase(), ViewPhase::ErrorNoData);
        assert_eq!(state.blocking_error(), Some(RATE_LIMITED_MESSAGE));
        assert_eq!(state.background_error(), None);
        assert!(!state.loading);
    }

    #[test]
    fn test_failure_with_quote_is_stale() {
        let mut state = FetchState::default();
        state.begin_fetch();
        state.apply_success(
            Some(Quote::new(1.0, 0.5)),
            vec![DisplayPoint::new("Mar 14", 1.0)],
        );
        state.begin_fetch();
        state.apply_failure(&FetchError::ChartUnavailable { status: 500 });

        assert_eq!(state.phase(), ViewPhase::ReadyStaleError);
        assert_eq!(state.blocking_error(), None);
        assert!(state.background_error().is_some());
        assert_eq!(state.series.len(), 1);
    }

    #[test]
    fn test_failed_switch_keeps_series_timeframe() {
        let mut state = FetchState::new(Timeframe::Week);
        state.begin_fetch();
        state.apply_success(
            Some(Quote::new(1.0, 0.5)),
            vec![DisplayPoint::new("Mar 14", 1.0)],
        );
        assert_eq!(state.series_timeframe, Some(Timeframe::Week));

        state.timeframe = Timeframe::Month;
        state.begin_fetch();
        state.apply_failure(&FetchError::ChartUnavailable { status: 500 });

        assert_eq!(state.timeframe, Timeframe::Month);
        assert_eq!(state.chart_timeframe(), Timeframe::Week);

        state.begin_fetch();
        state.apply_success(None, vec![DisplayPoint::new("Mar 1", 1.1)]);
        assert_eq!(state.chart_timeframe(), Timeframe::Month);
    }

    #[test]
    fn test_chart_timeframe_defaults_to_selection() {
        let state = FetchState::new(Timeframe::Year);
        assert_eq!(state.series_timeframe, None);
        assert_eq!(state.chart_timeframe(), Timeframe::Year);
    }

    #[test]
    fn test_begin_fetch_clears_error() {
        let mut state = FetchState::default();
        state.apply_failure(&FetchError::network("boom"));
        state.begin_fetch();
        assert!(state.error.is_none());
    }
}
