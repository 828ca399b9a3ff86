//! Domain types for the tradescope trade history viewer.
//!
//! # Module Organization
//!
//! - [`error`] - Error type shared by the client and the view
//! - [`network`] - Network identifiers and explorer URL templates
//! - [`trade`] - Trade records, symbol and timestamp helpers
//! - [`address`] - Wallet address normalization

// ============================================================================
// Module Declarations
// ============================================================================

pub mod address;
pub mod error;
pub mod network;
pub mod trade;

// ============================================================================
// Re-exports
// ============================================================================

pub use address::{normalize_address, parse_wallet_address};
pub use error::TradeError;
pub use network::NetworkId;
pub use trade::{Trade, icon_path};
