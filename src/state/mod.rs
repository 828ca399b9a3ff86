//! State management module for the tradescope TUI application.
//!
//! This module separates state into:
//!
//! - [`StoreSnapshot`] - Wallet, synths and loading flag, the view's only input
//! - [`TradesView`] - Trade lists and their load lifecycle
//! - [`UiState`] - UI presentation concerns (popups, toasts, selection)
//! - [`AppConfig`] - Persistent configuration with load/save capabilities
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                       App                           │
//! ├───────────────┬────────────────┬────────────────────┤
//! │ StoreSnapshot │   TradesView   │      UiState       │
//! │  - wallet     │  - all / mine  │  - popups          │
//! │  - synths     │  - request id  │  - toasts          │
//! │  - loading    │  - last error  │  - selection       │
//! └───────────────┴────────────────┴────────────────────┘
//! ```

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::client::TradesApi;
use crate::domain::{NetworkId, Trade, TradeError};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod store;
pub mod trades_view;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use store::{StoreSnapshot, WalletInfo};
pub use trades_view::{ApplyOutcome, LoadRequest, TradeLists, TradesView};
pub use ui_state::{PopupState, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background fetches to the main app loop.
#[derive(Debug)]
pub enum AppMessage {
    /// The tradable synths for `network` were fetched.
    SynthsLoaded {
        /// Network the fetch was made for.
        network: Option<NetworkId>,
        /// Symbols, or the error text.
        result: Result<Vec<String>, String>,
    },
    /// A trade load settled.
    TradesLoaded {
        /// The request that produced this response.
        request: LoadRequest,
        /// Trades as returned by the API.
        result: Result<Vec<Trade>, TradeError>,
    },
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
///
/// The `store` is rebuilt from user actions and fetch results; after every
/// change [`App::sync_view`] hands it to the view so the view can decide
/// whether to load.
pub struct App {
    /// Wallet, synths and loading flag.
    pub store: StoreSnapshot,

    /// Trade history view.
    pub view: TradesView,

    /// UI state - popups, toasts, selection.
    pub ui: UiState,

    /// Persisted settings, saved back when network or wallet change.
    pub config: AppConfig,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for UI animations.
    pub animation_tick: u64,

    // NOTE: Channel sends use `let _ = tx.send(...)`: the receiver is only
    // dropped during shutdown.
    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    /// Trade history API.
    pub(crate) api: Arc<dyn TradesApi>,

    /// Whether configuration changes are written to disk.
    pub(crate) persist_config: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("store", &self.store)
            .field("view", &self.view)
            .field("ui", &self.ui)
            .field("config", &self.config)
            .field("exit", &self.exit)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Network used for explorer links and the header.
    #[must_use]
    pub fn display_network(&self) -> NetworkId {
        self.store.display_network()
    }

    /// Trades currently displayed, empty before the first load.
    #[must_use]
    pub fn displayed_trades(&self) -> &[Trade] {
        self.view.displayed().unwrap_or_default()
    }

    /// The trade under the selection, if any.
    #[must_use]
    pub fn selected_trade(&self) -> Option<&Trade> {
        self.ui
            .selected
            .and_then(|index| self.displayed_trades().get(index))
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing
mod app_messages;

// Command execution, input handling
mod app_commands;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
