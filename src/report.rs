//! Non-interactive trade listing for the `list` subcommand.
//!
//! Fetches once, derives the lists the same way the TUI does and renders the
//! displayed list as tab separated text or JSON.

use color_eyre::Result;

use crate::client::TradesApi;
use crate::domain::{NetworkId, Trade, TradeError};
use crate::state::TradeLists;
use crate::widgets::{EMPTY_NOTICE, TradeRow};
use crate::widgets::trade_table::COLUMN_HEADERS;

/// Options of a single listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Network to ask for; also picks the explorer for links.
    pub network: Option<NetworkId>,
    /// Wallet whose trades form the "mine" list.
    pub wallet: Option<String>,
    /// List only the wallet's own trades.
    pub mine: bool,
    /// List every trade even when a wallet is given.
    pub all: bool,
    /// Print JSON instead of tab separated lines.
    pub json: bool,
}

/// Fetches and renders the trade list.
///
/// # Errors
///
/// Returns an error if the fetch fails or the rows cannot be serialized.
pub async fn run_list(api: &dyn TradesApi, options: &ListOptions) -> Result<String> {
    let trades = api
        .fetch_trades(options.network)
        .await
        .map_err(TradeError::into_report)?;

    let mut lists = TradeLists::derive(trades, options.wallet.as_deref());
    tracing::debug!(
        all = lists.all().len(),
        mine = lists.mine().map(<[Trade]>::len),
        "derived trade lists"
    );
    select_list(&mut lists, options);

    let network = NetworkId::or_default_display(options.network);
    let rows: Vec<TradeRow> = lists
        .displayed()
        .iter()
        .map(|trade| TradeRow::new(trade, network))
        .collect();

    if options.json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    if rows.is_empty() {
        return Ok(EMPTY_NOTICE.to_string());
    }

    let mut header: Vec<&str> = COLUMN_HEADERS[..4].to_vec();
    header.push("Link");
    let mut lines = vec![header.join("\t")];
    lines.extend(rows.iter().map(TradeRow::to_tsv));
    Ok(lines.join("\n"))
}

/// Switches to the list the options ask for.
///
/// `mine` without personal trades falls back to everything, like the `m` key.
fn select_list(lists: &mut TradeLists, options: &ListOptions) {
    let wants_all = if options.all {
        true
    } else if options.mine {
        false
    } else {
        return;
    };

    if lists.showing_all() != wants_all && !lists.toggle() {
        tracing::info!("wallet has no trades of its own, listing all");
    }
}

// ============================================================================
// Tests
// ============================================================================
