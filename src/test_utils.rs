//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::client::TradesApi;
use crate::domain::{NetworkId, Trade, TradeError};
use crate::state::{App, AppConfig, TradesView};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TradeMother;

impl TradeMother {
    /// A sUSD -> sTRX trade with the given hash and timestamp.
    #[must_use]
    pub fn at(hash: &str, block_timestamp: i64) -> Trade {
        Trade {
            exchange_from_currency: "sUSD".to_string(),
            exchange_to_currency: "sTRX".to_string(),
            exchange_from_amount: 100.0,
            exchange_to_amount: 4_000.0,
            from: "41aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string(),
            block_timestamp,
            transaction_hash: hash.to_string(),
            network_id: NetworkId::MAINNET,
        }
    }

    #[must_use]
    pub fn from_sender(hash: &str, block_timestamp: i64, sender: &str) -> Trade {
        Trade {
            from: sender.to_string(),
            ..Self::at(hash, block_timestamp)
        }
    }

    #[must_use]
    pub fn with_to_currency(hash: &str, block_timestamp: i64, to_currency: &str) -> Trade {
        Trade {
            exchange_to_currency: to_currency.to_string(),
            ..Self::at(hash, block_timestamp)
        }
    }

    #[must_use]
    pub fn exchange(from: &str, from_amount: f64, to: &str, to_amount: f64) -> Trade {
        Trade {
            exchange_from_currency: from.to_string(),
            exchange_from_amount: from_amount,
            exchange_to_currency: to.to_string(),
            exchange_to_amount: to_amount,
            ..Self::at("0xhash", 1_700_000_000_000)
        }
    }
}

pub struct JsonMother;

impl JsonMother {
    /// A trade record exactly as the API serializes it.
    #[must_use]
    pub fn trade(hash: &str, block_timestamp: i64) -> Value {
        json!({
            "exchangeFromCurrency": "sUSD",
            "exchangeToCurrency": "sTRX",
            "exchangeFromAmount": 100,
            "exchangeToAmount": 4000.5,
            "from": "41aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "blockTimestamp": block_timestamp,
            "transactionHash": hash,
            "networkId": 1
        })
    }
}

pub struct AppMother;

impl AppMother {
    /// An app that never touches the config file, with nothing loaded.
    #[must_use]
    pub fn empty() -> App {
        App::new(AppConfig::default(), Arc::new(MockTradesApi::default())).without_persistence()
    }

    /// An app whose view already holds `trades`, loaded for `wallet`.
    #[must_use]
    pub fn loaded(trades: Vec<Trade>, wallet: Option<&str>) -> App {
        let mut app = Self::empty();
        app.store.wallet.selected_wallet = wallet.map(str::to_string);
        app.store.available_synths = vec!["sUSD".to_string()];
        app.view = TradesView::new(&app.store);

        let request = app.view.begin_load(&app.store);
        app.view.apply(&request, Ok(trades));
        app.ui.clamp_selection(app.displayed_trades().len());
        app
    }
}

// ============================================================================
// Mock API
// ============================================================================

/// In-memory [`TradesApi`] that records how it was called.
#[derive(Debug, Default)]
pub struct MockTradesApi {
    trades: Vec<Trade>,
    synths: Vec<String>,
    fail_trades: bool,
    fail_synths: bool,
    trade_calls: AtomicUsize,
    requested_networks: Mutex<Vec<Option<NetworkId>>>,
}

impl MockTradesApi {
    #[must_use]
    pub fn new(trades: Vec<Trade>, synths: &[&str]) -> Self {
        Self {
            trades,
            synths: synths.iter().map(|s| (*s).to_string()).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing_trades(mut self) -> Self {
        self.fail_trades = true;
        self
    }

    #[must_use]
    pub fn failing_synths(mut self) -> Self {
        self.fail_synths = true;
        self
    }

    #[must_use]
    pub fn trade_calls(&self) -> usize {
        self.trade_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn requested_networks(&self) -> Vec<Option<NetworkId>> {
        self.requested_networks
            .lock()
            .map(|networks| networks.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TradesApi for MockTradesApi {
    async fn fetch_trades(&self, network: Option<NetworkId>) -> Result<Vec<Trade>, TradeError> {
        self.trade_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut networks) = self.requested_networks.lock() {
            networks.push(network);
        }
        if self.fail_trades {
            return Err(TradeError::status(503, "mock://exchanges"));
        }
        Ok(self.trades.clone())
    }

    async fn fetch_synths(&self, _network: Option<NetworkId>) -> Result<Vec<String>, TradeError> {
        if self.fail_synths {
            return Err(TradeError::status(503, "mock://synths"));
        }
        Ok(self.synths.clone())
    }
}
