//! Error types for suiwatch.

use thiserror::Error;

/// Message shown when the quote request is rejected.
pub const RATE_LIMITED_MESSAGE: &str = "Rate limit reached. Please wait a moment.";

/// Message shown when the history request is rejected.
pub const CHART_UNAVAILABLE_MESSAGE: &str = "Unable to fetch chart data";

/// Failure of a single fetch cycle.
///
/// The `Display` output is the user-facing message stored in the view state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The quote request returned a non-success status.
    #[error("Rate limit reached. Please wait a moment.")]
    RateLimited {
        /// HTTP status code.
        status: u16,
    },

    /// The history request returned a non-success status.
    #[error("Unable to fetch chart data")]
    ChartUnavailable {
        /// HTTP status code.
        status: u16,
    },

    /// Transport failure or malformed payload.
    #[error("{message}")]
    NetworkOrParseFailure {
        /// Description of the failure.
        message: String,
    },
}

impl FetchError {
    /// Creates a network or parse failure from any displayable error.
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::NetworkOrParseFailure {
            message: err.to_string(),
        }
    }

    /// Returns the HTTP status for status-derived failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited { status } | Self::ChartUnavailable { status } => Some(*status),
            Self::NetworkOrParseFailure { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            FetchError::RateLimited { status: 429 }.to_string(),
            RATE_LIMITED_MESSAGE
        );
        assert_eq!(
            FetchError::ChartUnavailable { status: 503 }.to_string(),
            CHART_UNAVAILABLE_MESSAGE
        );
        assert_eq!(FetchError::network("connection reset").to_string(), "connection reset");
    }

    #[test]
    fn test_status() {
        assert_eq!(FetchError::RateLimited { status: 429 }.status(), Some(429));
        assert_eq!(FetchError::network("x").status(), None);
    }
}
