use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod client;
mod commands;
mod constants;
mod domain;
mod logging;
mod report;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::{
    client::HttpTradesClient,
    domain::{NetworkId, TradeError},
    report::ListOptions,
    state::{App, AppConfig},
};

// tradescope version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// tradescope - Terminal UI for synth exchange trading history
#[derive(Parser, Debug)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run; the TUI starts when omitted
    #[command(subcommand)]
    command: Option<Commands>,

    /// Network id (1 Mainnet, 2 Shasta, 42 Nile)
    #[arg(short, long, global = true)]
    network: Option<u32>,

    /// Wallet address whose trades form the "mine" list
    #[arg(short, long, global = true)]
    wallet: Option<String>,

    /// Base URL of the trades API
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log filter, e.g. `debug` or `tradescope=trace`
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the trade list once and exit
    List {
        /// Show only the wallet's own trades
        #[arg(short, long, conflicts_with = "all")]
        mine: bool,

        /// Show every trade even when a wallet is set
        #[arg(short, long)]
        all: bool,

        /// Print JSON instead of tab separated lines
        #[arg(long)]
        json: bool,
    },
    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if matches!(cli.command, Some(Commands::Version)) {
        println!("tradescope v{VERSION}");
        println!("A terminal UI for synth exchange trading history");
        return Ok(());
    }

    let _log_guard = logging::init(cli.log_level.as_deref())?;

    let mut config = AppConfig::load();
    config.apply_overrides(
        cli.network.map(NetworkId::from),
        cli.wallet.clone(),
        cli.api_url.clone(),
    );

    let client = HttpTradesClient::new(config.api_url.clone(), config.http_config())
        .map_err(TradeError::into_report)?;

    if let Some(Commands::List { mine, all, json }) = cli.command {
        let options = ListOptions {
            network: config.network_id,
            wallet: config
                .wallet
                .clone()
                .filter(|wallet| !wallet.trim().is_empty()),
            mine,
            all,
            json,
        };
        let output = report::run_list(&client, &options).await?;
        println!("{output}");
        return Ok(());
    }

    tracing::info!(version = VERSION, api_url = client.base_url(), "starting tradescope");

    let mut terminal = tui::init()?;
    let mut app = App::new(config, Arc::new(client));
    let result = app.run(&mut terminal).await;
    tui::restore()?;
    result
}
