//! CLI command implementations.

pub(crate) mod chart;
pub(crate) mod quote;
pub(crate) mod timeframes;
pub(crate) mod watch;
