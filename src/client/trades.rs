//! Trades API client.
//!
//! The API exposes two read-only endpoints:
//!
//! - `GET {base}/exchanges[?networkId=N]` - JSON array of trade records
//! - `GET {base}/synths[?networkId=N]` - JSON array of tradable synth symbols

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::http::{HttpClient, HttpConfig};
use crate::domain::{NetworkId, Trade, TradeError};

// ============================================================================
// Constants
// ============================================================================

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

// ============================================================================
// Traits
// ============================================================================

/// Source of trade records and tradable synths.
///
/// The network id is optional: without one the API answers for its primary
/// network.
#[async_trait]
pub trait TradesApi: Send + Sync {
    /// Fetch every recorded exchange, in no particular order.
    async fn fetch_trades(&self, network: Option<NetworkId>) -> Result<Vec<Trade>, TradeError>;

    /// Fetch the symbols of the synths that can currently be traded.
    async fn fetch_synths(&self, network: Option<NetworkId>) -> Result<Vec<String>, TradeError>;
}

// ============================================================================
// HTTP Implementation
// ============================================================================

/// [`TradesApi`] over HTTP + JSON.
#[derive(Debug, Clone)]
pub struct HttpTradesClient {
    http: HttpClient,
    base_url: String,
}

impl HttpTradesClient {
    /// Create a new client for the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns `TradeError::ClientInit` if the HTTP client fails to initialize.
    pub fn new(base_url: impl Into<String>, config: HttpConfig) -> Result<Self, TradeError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http: HttpClient::with_config(config)?,
            base_url,
        })
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL of an endpoint, scoped to a network when one is given.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str, network: Option<NetworkId>) -> String {
        match network {
            Some(network) => format!("{}/{endpoint}?networkId={}", self.base_url, network.get()),
            None => format!("{}/{endpoint}", self.base_url),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TradeError> {
        tracing::debug!(%url, "requesting");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TradeError::status(status.as_u16(), url));
        }

        let body = response.text().await?;
        parse_json(&body)
    }
}

#[async_trait]
impl TradesApi for HttpTradesClient {
    async fn fetch_trades(&self, network: Option<NetworkId>) -> Result<Vec<Trade>, TradeError> {
        let url = self.endpoint_url("exchanges", network);
        let trades: Vec<Trade> = self.get_json(&url).await?;
        tracing::info!(count = trades.len(), "fetched trades");
        Ok(trades)
    }

    async fn fetch_synths(&self, network: Option<NetworkId>) -> Result<Vec<String>, TradeError> {
        let url = self.endpoint_url("synths", network);
        self.get_json(&url).await
    }
}

/// Parse a JSON response body.
///
/// # Errors
///
/// Returns `TradeError::Parse` naming the serde failure.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, TradeError> {
    serde_json::from_str(body).map_err(|e| TradeError::parse(e.to_string()))
}

// ============================================================================
// Tests
// ============================================================================
