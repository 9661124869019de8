//! Quote command implementation.

use crate::display::{Settings, fetch_once};
use anyhow::Result;
use suiwatch_lib::prelude::*;
use suiwatch_lib::{format_change, format_price};

/// Fetches and prints the current price and 24-hour change.
pub(crate) async fn show_quote(settings: &Settings) -> Result<()> {
    let snapshot = fetch_once(settings, Timeframe::IntradayDay).await?;
    let quote = snapshot.quote.as_ref();

    let asset = &settings.client.asset;
    println!(
        "{:<10} {:>12} {:>9}",
        asset.to_string(),
        format_price(quote),
        format_change(quote)
    );

    if quote.is_none() && !settings.quiet {
        eprintln!("No quote returned for {}", asset.id());
    }
    Ok(())
}
