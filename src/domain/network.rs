//! Network identifiers and block explorer links.
//!
//! Trades are tagged with a numeric network id. Three ids are known and each
//! maps to a block explorer URL template; any other id is carried through
//! untouched but has no explorer.

use serde::{Deserialize, Serialize};

// ============================================================================
// Network Identifier
// ============================================================================

/// Numeric network identifier as reported by the wallet and the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(pub u32);

impl NetworkId {
    /// The production network.
    pub const MAINNET: Self = Self(1);
    /// The Shasta test network.
    pub const SHASTA: Self = Self(2);
    /// The Nile test network.
    pub const NILE: Self = Self(42);

    /// Networks with an explorer, in cycling order.
    pub const KNOWN: [Self; 3] = [Self::MAINNET, Self::SHASTA, Self::NILE];

    /// Returns the raw numeric id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the human-readable name of the network.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            1 => "Mainnet",
            2 => "Shasta",
            42 => "Nile",
            _ => "Unknown",
        }
    }

    /// Returns the explorer URL template for this network.
    ///
    /// The transaction hash is appended to the template verbatim.
    #[must_use]
    pub const fn explorer_template(self) -> Option<&'static str> {
        match self.0 {
            1 => Some("https://tronscan.io/#/transaction/"),
            2 => Some("https://shasta.tronscan.io/#/transaction/"),
            42 => Some("https://nile.tronscan.io/#/transaction/"),
            _ => None,
        }
    }

    /// Builds the explorer link for a transaction hash.
    #[must_use]
    pub fn explorer_url(self, transaction_hash: &str) -> Option<String> {
        self.explorer_template()
            .map(|template| format!("{template}{transaction_hash}"))
    }

    /// Returns the next known network, wrapping around.
    ///
    /// Unknown ids move to the first known network.
    #[must_use]
    pub fn next(self) -> Self {
        match Self::KNOWN.iter().position(|known| *known == self) {
            Some(index) => Self::KNOWN[(index + 1) % Self::KNOWN.len()],
            None => Self::KNOWN[0],
        }
    }

    /// Resolves the network used for display when none is known.
    #[must_use]
    pub fn or_default_display(network: Option<Self>) -> Self {
        network.unwrap_or(Self::MAINNET)
    }
}

impl Default for NetworkId {
    fn default() -> Self {
        Self::MAINNET
    }
}

impl From<u32> for NetworkId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
