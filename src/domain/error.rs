//! Error types for trade history operations.
//!
//! This module defines the error type shared by the API client, the address
//! normalizer and the trade view.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for trade history operations.
#[derive(Debug, Error)]
pub enum TradeError {
    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("API returned status {code} for {url}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// The requested URL.
        url: String,
    },

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// A wallet or sender address that cannot be normalized.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// HTTP client could not be built.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),
}

impl TradeError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new status error.
    #[must_use]
    pub fn status(code: u16, url: impl Into<String>) -> Self {
        Self::Status {
            code,
            url: url.into(),
        }
    }

    /// Create a new invalid address error.
    #[must_use]
    pub fn invalid_address(address: impl Into<String>) -> Self {
        Self::InvalidAddress(address.into())
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Convert to a `color_eyre::Report`.
    ///
    /// Lets `TradeError` flow through functions returning `color_eyre::Result`
    /// while keeping the message intact.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
