//! Trade history view state.
//!
//! [`TradeLists`] holds the two derived lists ("all" and "mine") and which
//! one is displayed. [`TradesView`] wraps it with the load lifecycle: when a
//! load is due, which request is current, and what the last failure was.
//!
//! ```text
//!  StoreSnapshot ──sync──► TradesView ──LoadRequest──► TradesApi
//!                              ▲                           │
//!                              └──────apply(result)────────┘
//! ```

use crate::domain::{NetworkId, Trade, TradeError, normalize_address};

use super::store::{EffectKey, StoreSnapshot};

// ============================================================================
// Derived Lists
// ============================================================================

/// The "all" and "mine" trade lists plus the display flag.
///
/// The displayed list is always one of the two retained lists. Toggling only
/// flips the flag.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeLists {
    all: Vec<Trade>,
    mine: Option<Vec<Trade>>,
    showing_all: bool,
}

impl TradeLists {
    /// Derives both lists from a raw API response.
    ///
    /// Trades are stably sorted newest first and denylisted trades are
    /// dropped. With an active wallet the "mine" list holds the trades sent
    /// from it and is displayed by default.
    #[must_use]
    pub fn derive(mut trades: Vec<Trade>, wallet: Option<&str>) -> Self {
        trades.sort_by(|a, b| b.block_timestamp.cmp(&a.block_timestamp));
        trades.retain(|trade| !trade.is_denylisted());

        let mine = wallet
            .map(str::trim)
            .filter(|wallet| !wallet.is_empty())
            .map(|wallet| {
                let wallet = normalize_address(wallet);
                trades
                    .iter()
                    .filter(|trade| normalize_address(&trade.from) == wallet)
                    .cloned()
                    .collect::<Vec<_>>()
            });

        let showing_all = mine.is_none();
        Self {
            all: trades,
            mine,
            showing_all,
        }
    }

    /// Switches between "all" and "mine".
    ///
    /// Does nothing while showing all trades when there are no personal
    /// trades to switch to.
    ///
    /// # Returns
    ///
    /// `true` if the displayed list changed.
    pub fn toggle(&mut self) -> bool {
        if self.showing_all && self.mine.as_ref().is_none_or(Vec::is_empty) {
            return false;
        }
        self.showing_all = !self.showing_all;
        true
    }

    /// The list currently displayed.
    #[must_use]
    pub fn displayed(&self) -> &[Trade] {
        if self.showing_all {
            &self.all
        } else {
            self.mine.as_deref().unwrap_or_default()
        }
    }

    /// Every trade that survived filtering.
    #[must_use]
    pub fn all(&self) -> &[Trade] {
        &self.all
    }

    /// Trades sent from the active wallet, if a wallet was active.
    #[must_use]
    pub fn mine(&self) -> Option<&[Trade]> {
        self.mine.as_deref()
    }

    /// Whether the "all" list is displayed.
    #[must_use]
    pub const fn showing_all(&self) -> bool {
        self.showing_all
    }
}

// ============================================================================
// Load Requests
// ============================================================================

/// Monotonic identifier of a trade load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Raw sequence number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A load the caller should perform against the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Sequence number; only the latest request's response is applied.
    pub id: RequestId,
    /// Network to ask for, `None` lets the API pick its primary network.
    pub network: Option<NetworkId>,
    /// Wallet active when the load started.
    pub wallet: Option<String>,
}

/// What happened when a response was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The lists were replaced; `displayed` trades are now shown.
    Loaded {
        /// Number of trades in the displayed list.
        displayed: usize,
    },
    /// The load failed; the previous lists are kept.
    Failed(String),
    /// A newer request superseded this one; the response was dropped.
    Stale,
}

// ============================================================================
// TradesView
// ============================================================================

/// Lifecycle and view state of the trade history.
#[derive(Debug, Clone)]
pub struct TradesView {
    lists: Option<TradeLists>,
    initial_showing_all: bool,
    last_key: Option<EffectKey>,
    next_request: u64,
    pending: Option<RequestId>,
    last_error: Option<String>,
}

impl TradesView {
    /// Creates an empty view.
    ///
    /// The view starts on "mine" when a wallet is connected, otherwise on
    /// "all".
    #[must_use]
    pub fn new(store: &StoreSnapshot) -> Self {
        Self {
            lists: None,
            initial_showing_all: store.wallet.active_wallet().is_none(),
            last_key: None,
            next_request: 0,
            pending: None,
            last_error: None,
        }
    }

    /// Re-evaluates the load trigger against the current store.
    ///
    /// The first call is the mount: it loads only when tradable synths are
    /// known. Later calls act only when the effect key changed, and load when
    /// the wallet changed or when nothing is loaded, nothing is in flight and
    /// the loading screen is hidden.
    ///
    /// # Returns
    ///
    /// The load to perform, if any.
    pub fn sync(&mut self, store: &StoreSnapshot) -> Option<LoadRequest> {
        let key = store.effect_key();
        if self.lists.is_none() {
            self.initial_showing_all = key.wallet.is_none();
        }

        let should_load = match self.last_key.replace(key.clone()) {
            None => !store.available_synths.is_empty(),
            Some(previous) if previous == key => false,
            Some(previous) => {
                previous.wallet != key.wallet
                    || (self.lists.is_none() && self.pending.is_none() && !key.loading)
            }
        };

        should_load.then(|| self.begin_load(store))
    }

    /// Starts a load unconditionally, superseding any load in flight.
    pub fn begin_load(&mut self, store: &StoreSnapshot) -> LoadRequest {
        self.next_request += 1;
        let id = RequestId(self.next_request);
        self.pending = Some(id);

        tracing::debug!(request = id.get(), "starting trade load");
        LoadRequest {
            id,
            network: store.wallet.network_id,
            wallet: store.wallet.active_wallet().map(str::to_string),
        }
    }

    /// Applies the response of a load.
    ///
    /// Responses of superseded requests are dropped so a slow response never
    /// overwrites a newer one.
    pub fn apply(
        &mut self,
        request: &LoadRequest,
        result: Result<Vec<Trade>, TradeError>,
    ) -> ApplyOutcome {
        if self.pending != Some(request.id) {
            tracing::debug!(request = request.id.get(), "dropping stale trade response");
            return ApplyOutcome::Stale;
        }
        self.pending = None;

        match result {
            Ok(trades) => {
                let lists = TradeLists::derive(trades, request.wallet.as_deref());
                let displayed = lists.displayed().len();
                self.lists = Some(lists);
                self.last_error = None;
                ApplyOutcome::Loaded { displayed }
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(request = request.id.get(), error = %message, "trade load failed");
                self.last_error = Some(message.clone());
                ApplyOutcome::Failed(message)
            }
        }
    }

    /// Switches between "all" and "mine".
    ///
    /// # Returns
    ///
    /// `true` if the displayed list changed.
    pub fn toggle(&mut self) -> bool {
        self.lists.as_mut().is_some_and(TradeLists::toggle)
    }

    /// Drops loaded data and forgets any load in flight.
    ///
    /// The effect key is kept, so the next key change decides the reload.
    pub fn reset(&mut self, store: &StoreSnapshot) {
        self.lists = None;
        self.pending = None;
        self.last_error = None;
        self.initial_showing_all = store.wallet.active_wallet().is_none();
    }

    /// The displayed trades, `None` before the first successful load.
    #[must_use]
    pub fn displayed(&self) -> Option<&[Trade]> {
        self.lists.as_ref().map(TradeLists::displayed)
    }

    /// `true` when there is nothing to show in the table.
    #[must_use]
    pub fn has_no_trades(&self) -> bool {
        self.displayed().is_none_or(<[Trade]>::is_empty)
    }

    /// The derived lists, once loaded.
    #[must_use]
    pub fn lists(&self) -> Option<&TradeLists> {
        self.lists.as_ref()
    }

    /// Whether the "all" list is (or will be) displayed.
    #[must_use]
    pub fn showing_all(&self) -> bool {
        self.lists
            .as_ref()
            .map_or(self.initial_showing_all, TradeLists::showing_all)
    }

    /// Whether a load is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Message of the last failed load, cleared by the next success.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

// ============================================================================
// Tests
// ============================================================================
