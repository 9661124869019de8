//! suiwatch CLI - Live SUI/USD price dashboard in the terminal.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use suiwatch_lib::prelude::*;

mod commands;
mod display;
mod logging;

use display::Settings;

#[derive(Parser)]
#[command(name = "suiwatch")]
#[command(about = "Live SUI/USD price dashboard", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress spinners and informational output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Upstream API base URL
    #[arg(long, env = "SUIWATCH_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Pause before each upstream request, in milliseconds
    #[arg(long, env = "SUIWATCH_DELAY_MS", default_value = "1000", global = true)]
    delay_ms: u64,

    /// Maximum number of chart points
    #[arg(long, env = "SUIWATCH_BUDGET", default_value = "100", global = true)]
    budget: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the current price and 24h change
    Quote,

    /// Fetch the price history for a timeframe
    Chart {
        /// Timeframe (1d, 1w, 1m, 3m, 1y, all). Prompts when omitted on a terminal.
        #[arg(short, long)]
        timeframe: Option<Timeframe>,

        /// Output format (text, csv, json, ndjson)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the live dashboard, refreshing periodically
    Watch {
        /// Initial timeframe
        #[arg(short, long, default_value = "1w")]
        timeframe: Timeframe,

        /// Seconds between background refreshes (0 disables)
        #[arg(long, env = "SUIWATCH_INTERVAL_SECS", default_value = "60")]
        interval_secs: u64,
    },

    /// List available timeframes
    Timeframes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut client = ClientConfig::default().with_request_delay(Duration::from_millis(cli.delay_ms));
    if let Some(base_url) = cli.base_url {
        client = client.with_base_url(base_url);
    }
    let settings = Settings {
        client,
        budget: cli.budget,
        quiet: cli.quiet,
    };

    match command {
        Commands::Quote => commands::quote::show_quote(&settings).await,
        Commands::Chart {
            timeframe,
            format,
            output,
        } => commands::chart::chart(&settings, timeframe, format, output).await,
        Commands::Watch {
            timeframe,
            interval_secs,
        } => {
            let config = ControllerConfig::default()
                .with_timeframe(timeframe)
                .with_poll_interval(Duration::from_secs(interval_secs))
                .with_point_budget(settings.budget);
            commands::watch::watch(&settings, config).await
        }
        Commands::Timeframes => {
            commands::timeframes::list_timeframes();
            Ok(())
        }
    }
}
