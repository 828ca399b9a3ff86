//! Exchange trade records.
//!
//! A [`Trade`] is one synth exchange as reported by the API: which synth was
//! sold, which was bought, how much of each, by whom and when.

use serde::{Deserialize, Serialize};

use super::NetworkId;

/// Substring marking the synthetic asset whose trades are never shown.
pub const DENYLISTED_MARKER: &str = "XDR";

/// Directory holding the synth icons, relative to the asset root.
pub const SYNTH_ICON_DIR: &str = "images/synths";

// ============================================================================
// Helper Functions
// ============================================================================

/// Format a block timestamp (milliseconds) as `D/M/YYYY H:mmA`.
///
/// Day, month and hour are not zero padded, the hour uses the 24 hour clock
/// and the meridiem is appended directly after the minutes.
///
/// # Returns
///
/// The formatted date, or `"Invalid Date"` for timestamps chrono cannot
/// represent.
#[must_use]
pub fn format_timestamp(timestamp_ms: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(timestamp_ms) {
        Some(datetime) => datetime.format("%-d/%-m/%Y %-H:%M%p").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Strip every non-word character from a synth symbol.
///
/// Word characters are ASCII letters, digits and `_`.
#[must_use]
pub fn sanitize_symbol(symbol: &str) -> String {
    symbol
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Icon path for a synth symbol.
#[must_use]
pub fn icon_path(symbol: &str) -> String {
    format!("{SYNTH_ICON_DIR}/{}-icon.svg", sanitize_symbol(symbol))
}

// ============================================================================
// Trade
// ============================================================================

/// A single synth exchange transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Symbol of the synth that was sold.
    pub exchange_from_currency: String,
    /// Symbol of the synth that was bought.
    pub exchange_to_currency: String,
    /// Amount sold.
    pub exchange_from_amount: f64,
    /// Amount bought.
    pub exchange_to_amount: f64,
    /// Sender address, hex encoded.
    pub from: String,
    /// Block timestamp in milliseconds since the Unix epoch.
    pub block_timestamp: i64,
    /// Transaction hash; identifies the trade.
    pub transaction_hash: String,
    /// Network the trade happened on.
    pub network_id: NetworkId,
}

impl Trade {
    /// Returns `true` when the bought synth carries the denylisted marker.
    #[must_use]
    pub fn is_denylisted(&self) -> bool {
        self.exchange_to_currency.contains(DENYLISTED_MARKER)
    }

    /// Price of one unit bought, expressed in the sold synth.
    ///
    /// Not finite when nothing was bought.
    #[must_use]
    pub fn cross_rate(&self) -> f64 {
        self.exchange_from_amount / self.exchange_to_amount
    }

    /// Sanitized symbols of the sold and bought synths.
    #[must_use]
    pub fn pair(&self) -> (String, String) {
        (
            sanitize_symbol(&self.exchange_from_currency),
            sanitize_symbol(&self.exchange_to_currency),
        )
    }

    /// Formatted block timestamp.
    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        format_timestamp(self.block_timestamp)
    }

    /// Explorer link for this trade on the given network.
    #[must_use]
    pub fn explorer_url(&self, network: NetworkId) -> Option<String> {
        network.explorer_url(&self.transaction_hash)
    }
}

// ============================================================================
// Tests
// ============================================================================
