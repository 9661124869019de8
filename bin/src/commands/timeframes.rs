//! Timeframes command implementation.

use suiwatch_lib::LabelPolicy;
use suiwatch_lib::prelude::*;

/// Lists the selectable timeframes.
pub(crate) fn list_timeframes() {
    println!(
        "{:<6} {:<6} {:<6} {:<10} {:<10}",
        "ID", "LABEL", "DAYS", "CAPTION", "AXIS"
    );
    println!("{}", "-".repeat(42));

    for timeframe in Timeframe::all() {
        println!(
            "{:<6} {:<6} {:<6} {:<10} {:<10}",
            timeframe.as_str(),
            timeframe.label(),
            timeframe.days_param(),
            timeframe.caption(),
            LabelPolicy::for_timeframe(*timeframe).pattern(),
        );
    }
}
