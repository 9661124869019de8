//! Controller configuration.

use std::time::Duration;
use suiwatch_chart::DEFAULT_POINT_BUDGET;
use suiwatch_types::Timeframe;

/// Configuration for the view controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Period of the background refresh. Zero disables polling.
    pub poll_interval: Duration,
    /// Maximum chart points kept by the downsampler.
    pub point_budget: usize,
    /// Timeframe selected at startup.
    pub initial_timeframe: Timeframe,
}

impl ControllerConfig {
    /// Default background refresh period (60 seconds).
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

    /// Sets the background refresh period.
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the chart point budget.
    #[must_use]
    pub const fn with_point_budget(mut self, budget: usize) -> Self {
        self.point_budget = budget;
        self
    }

    /// Sets the startup timeframe.
    #[must_use]
    pub const fn with_timeframe(mut self, timeframe: Timeframe) -> Self {
        self.initial_timeframe = timeframe;
        self
    }

    /// Returns true if the background refresh is enabled.
    #[must_use]
    pub const fn polling_enabled(&self) -> bool {
        !self.poll_interval.is_zero()
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Self::DEFAULT_POLL_INTERVAL,
            point_budget: DEFAULT_POINT_BUDGET,
            initial_timeframe: Timeframe::default(),
        }
    }
}
