//! The target network.
//!
//! The session only ever talks to Avalanche Fuji. The parameters below are
//! what the wallet is asked to add/activate on `wallet_addEthereumChain`.

use serde::Serialize;

/// Parameters describing an EVM network to a wallet provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkParams {
    pub chain_id: u64,
    pub chain_name: &'static str,
    pub currency_name: &'static str,
    pub currency_symbol: &'static str,
    pub currency_decimals: u8,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
}

/// Avalanche Fuji C-Chain testnet.
pub const FUJI_TESTNET: NetworkParams = NetworkParams {
    chain_id: 0xa869,
    chain_name: "Avalanche Fuji Testnet",
    currency_name: "AVAX",
    currency_symbol: "AVAX",
    currency_decimals: 18,
    rpc_url: "https://api.avax-test.network/ext/bc/C/rpc",
    explorer_url: "https://testnet.snowtrace.io",
};

impl NetworkParams {
    /// Chain id in the `0x`-prefixed hex form wallets expect.
    pub fn chain_id_hex(&self) -> String {
        format!("{:#x}", self.chain_id)
    }

    /// Whether `chain_id` is this network.
    pub fn matches(&self, chain_id: u64) -> bool {
        self.chain_id == chain_id
    }

    /// The `wallet_addEthereumChain` parameter object.
    pub fn add_chain_request(&self) -> AddEthereumChainParameter {
        AddEthereumChainParameter {
            chain_id: self.chain_id_hex(),
            chain_name: self.chain_name.to_string(),
            native_currency: NativeCurrency {
                name: self.currency_name.to_string(),
                symbol: self.currency_symbol.to_string(),
                decimals: self.currency_decimals,
            },
            rpc_urls: vec![self.rpc_url.to_string()],
            block_explorer_urls: vec![self.explorer_url.to_string()],
        }
    }
}

/// EIP-3085 `wallet_addEthereumChain` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEthereumChainParameter {
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Parse a JSON-RPC hex quantity such as `"0xa869"`.
pub fn parse_quantity(s: &str) -> Result<u64, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| format!("quantity must start with 0x: {}", s))?;
    if digits.is_empty() {
        return Err("empty quantity".to_string());
    }
    u64::from_str_radix(digits, 16).map_err(|e| format!("invalid quantity {}: {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuji_chain_id_hex() {
        assert_eq!(FUJI_TESTNET.chain_id_hex(), "0xa869");
        assert_eq!(FUJI_TESTNET.chain_id, 43113);
    }

    #[test]
    fn test_add_chain_request_shape() {
        let value = serde_json::to_value(FUJI_TESTNET.add_chain_request()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "chainId": "0xa869",
                "chainName": "Avalanche Fuji Testnet",
                "nativeCurrency": { "name": "AVAX", "symbol": "AVAX", "decimals": 18 },
                "rpcUrls": ["https://api.avax-test.network/ext/bc/C/rpc"],
                "blockExplorerUrls": ["https://testnet.snowtrace.io"]
            })
        );
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0xa869").unwrap(), 43113);
        assert_eq!(parse_quantity("0XA869").unwrap(), 43113);
        assert_eq!(parse_quantity("0x1").unwrap(), 1);
        assert!(parse_quantity("a869").is_err());
        assert!(parse_quantity("0x").is_err());
        assert!(parse_quantity("0xnothex").is_err());
    }

    #[test]
    fn test_matches() {
        assert!(FUJI_TESTNET.matches(0xa869));
        assert!(!FUJI_TESTNET.matches(1));
    }
}
