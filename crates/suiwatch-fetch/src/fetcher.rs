//! Two-step quote and history fetch.

use async_trait::async_trait;
use std::time::Duration;
use suiwatch_types::{Asset, FetchError, MarketSnapshot, Quote, RawSeriesPoint, Timeframe};

use crate::client::{ClientConfig, HttpClient, HttpResponse, Transport};
use crate::parse::{parse_quote, parse_series};
use crate::url::{market_chart_url, simple_price_url};

/// Source of market snapshots for a timeframe.
///
/// The view controller depends on this trait rather than on a concrete fetcher.
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Fetches the current quote and the history for `timeframe`.
    ///
    /// # Errors
    ///
    /// Returns the failure of the first step that did not succeed.
    async fn fetch(&self, timeframe: Timeframe) -> Result<MarketSnapshot, FetchError>;
}

/// Fetches the quote, then the history, with a fixed pause before each request.
#[derive(Debug, Clone)]
pub struct Fetcher<T = HttpClient> {
    transport: T,
    base_url: String,
    asset: Asset,
    request_delay: Duration,
}

impl Fetcher<HttpClient> {
    /// Creates a fetcher backed by a reqwest client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let transport = HttpClient::new(config.clone())?;
        Ok(Self::with_transport(transport, &config))
    }

    /// Creates a fetcher with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }
}

impl<T: Transport> Fetcher<T> {
    /// Creates a fetcher over an arbitrary transport.
    #[must_use]
    pub fn with_transport(transport: T, config: &ClientConfig) -> Self {
        Self {
            transport,
            base_url: config.base_url.clone(),
            asset: config.asset.clone(),
            request_delay: config.request_delay,
        }
    }

    /// Returns the asset being fetched.
    #[must_use]
    pub const fn asset(&self) -> &Asset {
        &self.asset
    }

    /// Runs one fetch cycle.
    ///
    /// Steps run strictly in sequence: pause, quote request, pause, history
    /// request. The first failing step aborts the cycle and no partial
    /// series is returned.
    ///
    /// # Errors
    ///
    /// - [`FetchError::RateLimited`] if the quote request is not 2xx
    /// - [`FetchError::ChartUnavailable`] if the history request is not 2xx
    /// - [`FetchError::NetworkOrParseFailure`] on transport or payload errors
    pub async fn fetch(&self, timeframe: Timeframe) -> Result<MarketSnapshot, FetchError> {
        self.pause().await;
        let quote = self.fetch_quote().await?;

        self.pause().await;
        let series = self.fetch_series(timeframe).await?;

        Ok(MarketSnapshot::new(quote, series))
    }

    async fn fetch_quote(&self) -> Result<Option<Quote>, FetchError> {
        let url = simple_price_url(&self.base_url, &self.asset);
        let response = self.get(&url).await?;

        if !response.is_success() {
            return Err(FetchError::RateLimited {
                status: response.status,
            });
        }

        let quote = parse_quote(&response.body, &self.asset).map_err(FetchError::network)?;
        if quote.is_none() {
            tracing::debug!(asset = %self.asset.id(), "quote payload did not include asset");
        }
        Ok(quote)
    }

    async fn fetch_series(&self, timeframe: Timeframe) -> Result<Vec<RawSeriesPoint>, FetchError> {
        let url = market_chart_url(&self.base_url, &self.asset, timeframe);
        let response = self.get(&url).await?;

        if !response.is_success() {
            return Err(FetchError::ChartUnavailable {
                status: response.status,
            });
        }

        parse_series(&response.body).map_err(FetchError::network)
    }

    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        tracing::debug!(%url, "requesting");
        let response = self.transport.get(url).await.map_err(FetchError::network)?;
        tracing::debug!(%url, status = response.status, bytes = response.body.len(), "response");
        Ok(response)
    }

    async fn pause(&self) {
        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }
    }
}

#[async_trait]
impl<T: Transport> MarketSource for Fetcher<T> {
    async fn fetch(&self, timeframe: Timeframe) -> Result<MarketSnapshot, FetchError> {
        Self::fetch(self, timeframe).await
    }
}
