//! HTTP client for the trades API.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{HttpConfig, HttpTradesClient, TradesApi};
//!
//! let api = HttpTradesClient::new("http://localhost:8080/api", HttpConfig::default())?;
//! let trades = api.fetch_trades(Some(NetworkId::MAINNET)).await?;
//! ```

pub mod http;
pub mod trades;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::HttpConfig;
pub use trades::{DEFAULT_API_URL, HttpTradesClient, TradesApi};
