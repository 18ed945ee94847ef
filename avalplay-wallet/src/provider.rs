//! Wallet provider and chain reader collaborators.
//!
//! [`WalletProvider`] is the EIP-1193 surface the session needs from an
//! external wallet: accounts, chain switching, the active chain, and signed
//! submission. [`ChainReader`] is read-only chain access that needs no signer.
//! Both have JSON-RPC implementations here; tests substitute their own.

use async_trait::async_trait;
use avalplay_core::{
    network::{parse_quantity, AddEthereumChainParameter},
    Address,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

use crate::rpc::{RpcClient, RpcError};

#[cfg(test)]
use mockall::automock;

/// An unsigned transaction handed to the wallet for signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    /// `0x`-prefixed calldata.
    pub data: String,
}

impl TransactionRequest {
    pub fn new(from: &str, to: &Address, calldata: &[u8]) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            data: format!("0x{}", hex::encode(calldata)),
        }
    }
}

/// The parts of a transaction receipt the session looks at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    #[serde(default)]
    pub block_number: Option<String>,
    /// `0x1` on success, `0x0` on revert. Absent before Byzantium.
    #[serde(default)]
    pub status: Option<String>,
}

impl TransactionReceipt {
    pub fn succeeded(&self) -> bool {
        match self.status.as_deref() {
            Some(status) => parse_quantity(status).map(|s| s == 1).unwrap_or(false),
            None => true,
        }
    }
}

/// External wallet: account access, chain management and signing.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the user for account access (`eth_requestAccounts`).
    async fn request_accounts(&self) -> Result<Vec<String>, RpcError>;

    /// Add and activate a network (`wallet_addEthereumChain`).
    async fn add_chain(&self, params: &AddEthereumChainParameter) -> Result<(), RpcError>;

    /// The wallet's active chain (`eth_chainId`).
    async fn chain_id(&self) -> Result<u64, RpcError>;

    /// Sign and submit (`eth_sendTransaction`), returning the hash.
    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, RpcError>;

    /// Wait until `tx_hash` is included and return its receipt.
    async fn wait_for_receipt(&self, tx_hash: &str) -> Result<TransactionReceipt, RpcError>;
}

/// Read-only chain access.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// `eth_call` against the latest block, returning raw return data.
    async fn call(&self, to: &Address, calldata: &[u8]) -> Result<Vec<u8>, RpcError>;
}

/// An EIP-1193 wallet reachable over JSON-RPC.
#[derive(Debug, Clone)]
pub struct RpcWalletProvider {
    rpc: RpcClient,
    poll_interval: Duration,
}

impl RpcWalletProvider {
    pub fn new(rpc: RpcClient, poll_interval: Duration) -> Self {
        Self { rpc, poll_interval }
    }

    /// Probe `url` and return a provider only if a wallet answers there.
    ///
    /// This stands in for checking whether a wallet was injected into the
    /// page: no answer means no provider.
    pub async fn detect(url: &str, timeout: Duration, poll_interval: Duration) -> Option<Self> {
        let rpc = match RpcClient::new(url, timeout) {
            Ok(rpc) => rpc,
            Err(e) => {
                debug!("Failed to create client for {}: {}", url, e);
                return None;
            }
        };

        match rpc.call::<String>("eth_chainId", json!([])).await {
            Ok(chain_id) => {
                info!("Wallet provider found at {} (chain {})", url, chain_id);
                Some(Self::new(rpc, poll_interval))
            }
            Err(e) => {
                debug!("No wallet provider at {}: {}", url, e);
                None
            }
        }
    }
}

#[async_trait]
impl WalletProvider for RpcWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, RpcError> {
        self.rpc.call("eth_requestAccounts", json!([])).await
    }

    async fn add_chain(&self, params: &AddEthereumChainParameter) -> Result<(), RpcError> {
        let _: Option<serde_json::Value> = self
            .rpc
            .call("wallet_addEthereumChain", json!([params]))
            .await?;
        Ok(())
    }

    async fn chain_id(&self) -> Result<u64, RpcError> {
        let chain_id: String = self.rpc.call("eth_chainId", json!([])).await?;
        parse_quantity(&chain_id).map_err(RpcError::InvalidResponse)
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, RpcError> {
        self.rpc.call("eth_sendTransaction", json!([tx])).await
    }

    async fn wait_for_receipt(&self, tx_hash: &str) -> Result<TransactionReceipt, RpcError> {
        loop {
            let receipt: Option<TransactionReceipt> = self
                .rpc
                .call("eth_getTransactionReceipt", json!([tx_hash]))
                .await?;

            if let Some(receipt) = receipt {
                return Ok(receipt);
            }

            debug!("Transaction {} pending", tx_hash);
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

/// Chain reads through a plain RPC node.
#[derive(Debug, Clone)]
pub struct RpcChainReader {
    rpc: RpcClient,
}

impl RpcChainReader {
    pub fn new(rpc: RpcClient) -> Self {
        Self { rpc }
    }
}

#[async_trait]
impl ChainReader for RpcChainReader {
    async fn call(&self, to: &Address, calldata: &[u8]) -> Result<Vec<u8>, RpcError> {
        let params = json!([
            {
                "to": to.to_string(),
                "data": format!("0x{}", hex::encode(calldata)),
            },
            "latest"
        ]);

        let data: String = self.rpc.call("eth_call", params).await?;
        let digits = data.strip_prefix("0x").unwrap_or(&data);
        hex::decode(digits).map_err(|e| RpcError::InvalidResponse(format!("bad call data: {}", e)))
    }
}
