//! Read-only store snapshot handed to the trade view.
//!
//! The view never reaches into global state. Whatever it needs to decide
//! when and what to load is passed in through a [`StoreSnapshot`]:
//!
//! - the wallet info (network id and selected wallet address)
//! - the tradable synths, used only to gate the first load
//! - the global loading indicator

use crate::domain::NetworkId;

/// Wallet and network information as reported by the wallet provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletInfo {
    /// Network the wallet is connected to, if known.
    pub network_id: Option<NetworkId>,
    /// Address of the selected wallet, if any.
    pub selected_wallet: Option<String>,
}

impl WalletInfo {
    /// The selected wallet, ignoring blank input.
    #[must_use]
    pub fn active_wallet(&self) -> Option<&str> {
        self.selected_wallet
            .as_deref()
            .map(str::trim)
            .filter(|wallet| !wallet.is_empty())
    }
}

/// Snapshot of everything the trade view reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    /// Current wallet and network.
    pub wallet: WalletInfo,
    /// Synths currently available for trading.
    pub available_synths: Vec<String>,
    /// Whether the global loading screen is showing.
    pub loading_screen_visible: bool,
}

impl StoreSnapshot {
    /// Key the view's reload effect is subscribed to.
    #[must_use]
    pub fn effect_key(&self) -> EffectKey {
        EffectKey {
            wallet: self.wallet.active_wallet().map(str::to_string),
            loading: self.loading_screen_visible,
        }
    }

    /// Network used for explorer links, defaulting to mainnet.
    #[must_use]
    pub fn display_network(&self) -> NetworkId {
        NetworkId::or_default_display(self.wallet.network_id)
    }
}

/// The values whose change re-evaluates the reload trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectKey {
    /// Active wallet address.
    pub wallet: Option<String>,
    /// Global loading indicator.
    pub loading: bool,
}

// ============================================================================
// Tests
// ============================================================================
