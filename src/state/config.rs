//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure holding the selected
//! network, the connected wallet and the trade API location.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/tradescope/config.json`
//! - macOS: `~/Library/Application Support/tradescope/config.json`
//! - Windows: `%APPDATA%/tradescope/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::client::http::DEFAULT_TIMEOUT_SECS;
use crate::client::{DEFAULT_API_URL, HttpConfig};
use crate::domain::NetworkId;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
pub const APP_NAME: &str = "tradescope";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// Every field has a default so partial or older files still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Network selected in the wallet; `None` means not yet chosen.
    #[serde(default)]
    pub network_id: Option<NetworkId>,
    /// Connected wallet address as entered.
    #[serde(default)]
    pub wallet: Option<String>,
    /// Base URL of the trade history API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network_id: None,
            wallet: None,
            api_url: default_api_url(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!(error = %err, "config load failed, using defaults");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON content cannot be parsed.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// HTTP settings derived from this configuration.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::with_timeout(Duration::from_secs(self.request_timeout_secs))
    }

    /// Applies command line overrides; `None` leaves a field untouched.
    pub fn apply_overrides(
        &mut self,
        network: Option<NetworkId>,
        wallet: Option<String>,
        api_url: Option<String>,
    ) {
        if let Some(network) = network {
            self.network_id = Some(network);
        }
        if let Some(wallet) = wallet {
            self.wallet = Some(wallet);
        }
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.network_id, None);
        assert_eq!(config.wallet, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = AppConfig {
            network_id: Some(NetworkId::NILE),
            wallet: Some("41abc".to_string()),
            api_url: "http://example.test/api".to_string(),
            request_timeout_secs: 5,
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"network_id\":42"));
        assert_eq!(AppConfig::from_json(&json).unwrap(), config);
    }

    #[rstest]
    #[case::empty("{}", None)]
    #[case::network_only(r#"{"network_id":2}"#, Some(NetworkId::SHASTA))]
    #[case::null_network(r#"{"network_id":null,"wallet":"41ab"}"#, None)]
    fn test_partial_documents_fill_defaults(
        #[case] json: &str,
        #[case] expected: Option<NetworkId>,
    ) {
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.network_id, expected);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(AppConfig::from_json("{\"network_id\":\"one\"}").is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig {
            wallet: Some("41aa".to_string()),
            ..AppConfig::default()
        };
        config.apply_overrides(Some(NetworkId::SHASTA), None, Some("http://x".into()));

        assert_eq!(config.network_id, Some(NetworkId::SHASTA));
        assert_eq!(config.wallet.as_deref(), Some("41aa"));
        assert_eq!(config.api_url, "http://x");
    }

    #[test]
    fn test_http_config_uses_timeout() {
        let config = AppConfig {
            request_timeout_secs: 7,
            ..AppConfig::default()
        };
        assert_eq!(config.http_config().timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_config_path_has_json_extension() {
        if let Ok(path) = AppConfig::config_path() {
            let extension = path.extension().and_then(|e| e.to_str());
            assert_eq!(extension, Some("json"));
        }
    }
}
