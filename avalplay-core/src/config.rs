//! Session configuration.
//!
//! Every field has a default, so the binary runs without a config file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::contracts::ContractAddresses;
use crate::network::FUJI_TESTNET;

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub wallet: WalletConfig,

    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub contracts: ContractAddresses,
}

/// Wallet provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// JSON-RPC endpoint of an EIP-1193 wallet. Empty or absent disables the
    /// provider entirely.
    #[serde(default = "default_provider_url")]
    pub provider_url: Option<String>,

    /// How often to ask the wallet for a receipt while waiting for
    /// confirmation.
    #[serde(default = "default_receipt_poll_interval")]
    pub receipt_poll_interval_ms: u64,
}

/// Read-only chain access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// RPC endpoint used for balance and name reads.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Per-request HTTP timeout.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_provider_url() -> Option<String> {
    Some("http://127.0.0.1:1248".to_string())
}

fn default_receipt_poll_interval() -> u64 {
    1_000
}

fn default_rpc_url() -> String {
    FUJI_TESTNET.rpc_url.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            provider_url: default_provider_url(),
            receipt_poll_interval_ms: default_receipt_poll_interval(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl WalletConfig {
    /// The provider endpoint, if one is configured.
    pub fn provider_url(&self) -> Option<&str> {
        self.provider_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network.rpc_url.trim().is_empty() {
            return Err(ConfigError::Invalid("network.rpc_url must not be empty".into()));
        }
        if self.network.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "network.request_timeout_secs must be positive".into(),
            ));
        }
        if self.wallet.receipt_poll_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "wallet.receipt_poll_interval_ms must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.wallet.provider_url(), Some("http://127.0.0.1:1248"));
        assert_eq!(config.network.rpc_url, FUJI_TESTNET.rpc_url);
        assert_eq!(config.contracts, ContractAddresses::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml(
            r#"
            [wallet]
            provider_url = "http://localhost:8545"

            [contracts]
            nft = "0x00000000000000000000000000000000000000aa"
            token = "0x00000000000000000000000000000000000000bb"
            "#,
        )
        .unwrap();

        assert_eq!(config.wallet.provider_url(), Some("http://localhost:8545"));
        assert_eq!(config.wallet.receipt_poll_interval_ms, 1_000);
        assert_eq!(
            config.contracts.nft.to_string(),
            "0x00000000000000000000000000000000000000aa"
        );
    }

    #[test]
    fn test_partial_contracts_section() {
        let config =
            AppConfig::from_toml("[contracts]\nnft = \"0x00000000000000000000000000000000000000aa\"\n")
                .unwrap();

        assert_eq!(
            config.contracts.nft.to_string(),
            "0x00000000000000000000000000000000000000aa"
        );
        assert_eq!(config.contracts.token, ContractAddresses::default().token);
    }

    #[test]
    fn test_blank_provider_url_disables_provider() {
        let config = AppConfig::from_toml("[wallet]\nprovider_url = \"  \"\n").unwrap();
        assert_eq!(config.wallet.provider_url(), None);
    }

    #[test]
    fn test_invalid_contract_address_rejected() {
        let result = AppConfig::from_toml("[contracts]\nnft = \"0x1234\"\ntoken = \"0x1234\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = AppConfig::from_toml("[network]\nrequest_timeout_secs = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[wallet]\nreceipt_poll_interval_ms = 250").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.wallet.receipt_poll_interval_ms, 250);
    }

    #[test]
    fn test_from_missing_file() {
        let result = AppConfig::from_file(Path::new("/nonexistent/avalplay.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
