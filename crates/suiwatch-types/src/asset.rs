//! Tracked asset definition.

use serde::{Deserialize, Serialize};

/// The asset being tracked and the currency it is quoted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Upstream coin identifier (e.g., "sui").
    id: String,
    /// Ticker symbol (e.g., "SUI").
    symbol: String,
    /// Human-readable name (e.g., "Sui").
    name: String,
    /// Quote currency identifier (e.g., "usd").
    vs_currency: String,
}

impl Asset {
    /// Creates a new asset.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        vs_currency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
            vs_currency: vs_currency.into(),
        }
    }

    /// Returns SUI quoted in USD.
    #[must_use]
    pub fn sui() -> Self {
        Self::new("sui", "SUI", "Sui", "usd")
    }

    /// Returns the upstream coin identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the quote currency identifier.
    #[must_use]
    pub fn vs_currency(&self) -> &str {
        &self.vs_currency
    }

    /// Returns the payload key carrying the 24-hour change (e.g., "usd_24h_change").
    #[must_use]
    pub fn change_key(&self) -> String {
        format!("{}_24h_change", self.vs_currency)
    }
}

impl Default for Asset {
    fn default() -> Self {
        Self::sui()
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.symbol, self.vs_currency.to_uppercase())
    }
}
