//! CoinGecko URL construction.

use suiwatch_types::{Asset, Timeframe};

/// Base URL of the public CoinGecko v3 API.
pub const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Builds the URL for the current price and 24-hour change.
///
/// URL format: `{base}/simple/price?ids={id}&vs_currencies={currency}&include_24hr_change=true`
///
/// # Example
///
/// ```
/// use suiwatch_fetch::url::{BASE_URL, simple_price_url};
/// use suiwatch_types::Asset;
///
/// let url = simple_price_url(BASE_URL, &Asset::sui());
/// assert_eq!(
///     url,
///     "https://api.coingecko.com/api/v3/simple/price?ids=sui&vs_currencies=usd&include_24hr_change=true"
/// );
/// ```
#[must_use]
pub fn simple_price_url(base: &str, asset: &Asset) -> String {
    format!(
        "{}/simple/price?ids={}&vs_currencies={}&include_24hr_change=true",
        base.trim_end_matches('/'),
        asset.id(),
        asset.vs_currency()
    )
}

/// Builds the URL for the price history over a timeframe.
///
/// URL format: `{base}/coins/{id}/market_chart?vs_currency={currency}&days={days}`
#[must_use]
pub fn market_chart_url(base: &str, asset: &Asset, timeframe: Timeframe) -> String {
    format!(
        "{}/coins/{}/market_chart?vs_currency={}&days={}",
        base.trim_end_matches('/'),
        asset.id(),
        asset.vs_currency(),
        timeframe.days_param()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_chart_url_week() {
        let url = market_chart_url(BASE_URL, &Asset::sui(), Timeframe::Week);
        assert_eq!(
            url,
            "https://api.coingecko.com/api/v3/coins/sui/market_chart?vs_currency=usd&days=7"
        );
    }

    #[test]
    fn test_market_chart_url_all_uses_max() {
        let url = market_chart_url(BASE_URL, &Asset::sui(), Timeframe::All);
        assert!(url.ends_with("&days=max"));
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let url = simple_price_url("http://localhost:8080/", &Asset::sui());
        assert!(url.starts_with("http://localhost:8080/simple/price?"));
    }
}
