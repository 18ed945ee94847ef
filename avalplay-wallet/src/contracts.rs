//! Contract bindings for the NFT and token contracts.

use avalplay_core::{
    abi::{self, AbiError},
    contracts, format_units, Address, TOKEN_DECIMALS,
};
use primitive_types::U256;
use thiserror::Error;
use tracing::debug;

use crate::provider::{ChainReader, TransactionReceipt, TransactionRequest, WalletProvider};
use crate::rpc::RpcError;

/// Errors from a contract call.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("Failed to decode return data: {0}")]
    Decode(#[from] AbiError),

    #[error("Transaction {0} reverted")]
    Reverted(String),
}

/// Submit a transaction through the wallet and wait for a successful receipt.
async fn send_and_confirm(
    provider: &dyn WalletProvider,
    tx: TransactionRequest,
) -> Result<TransactionReceipt, ContractError> {
    let tx_hash = provider.send_transaction(&tx).await?;
    debug!("Submitted {} to {}", tx_hash, tx.to);

    let receipt = provider.wait_for_receipt(&tx_hash).await?;
    if !receipt.succeeded() {
        return Err(ContractError::Reverted(receipt.transaction_hash));
    }
    Ok(receipt)
}

/// The NFT contract: a single `mint()`.
#[derive(Debug, Clone, Copy)]
pub struct NftContract {
    address: Address,
}

impl NftContract {
    pub fn new(address: Address) -> Self {
        Self { address }
    }

    /// Mint one token to `from` and wait for confirmation.
    pub async fn mint(
        &self,
        provider: &dyn WalletProvider,
        from: &str,
    ) -> Result<TransactionReceipt, ContractError> {
        let tx = TransactionRequest::new(from, &self.address, &contracts::mint_calldata());
        send_and_confirm(provider, tx).await
    }
}

/// The claimable token contract.
#[derive(Debug, Clone, Copy)]
pub struct TokenContract {
    address: Address,
}

impl TokenContract {
    pub fn new(address: Address) -> Self {
        Self { address }
    }

    /// Claim tokens to `from` and wait for confirmation.
    pub async fn claim(
        &self,
        provider: &dyn WalletProvider,
        from: &str,
    ) -> Result<TransactionReceipt, ContractError> {
        let tx = TransactionRequest::new(from, &self.address, &contracts::claim_calldata());
        send_and_confirm(provider, tx).await
    }

    /// Raw `balanceOf(owner)`.
    pub async fn balance_of(
        &self,
        reader: &dyn ChainReader,
        owner: &Address,
    ) -> Result<U256, ContractError> {
        let data = reader
            .call(&self.address, &contracts::balance_of_calldata(owner))
            .await?;
        Ok(abi::decode_uint256(&data)?)
    }

    /// `balanceOf(owner)` formatted with the token's 18 decimals.
    pub async fn formatted_balance_of(
        &self,
        reader: &dyn ChainReader,
        owner: &Address,
    ) -> Result<String, ContractError> {
        let raw = self.balance_of(reader, owner).await?;
        Ok(format_units(raw, TOKEN_DECIMALS))
    }

    /// `name()`.
    pub async fn name(&self, reader: &dyn ChainReader) -> Result<String, ContractError> {
        let data = reader
            .call(&self.address, &contracts::name_calldata())
            .await?;
        Ok(abi::decode_string(&data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MockChainReader, MockWalletProvider};
    use avalplay_core::ContractAddresses;

    const OWNER: &str = "0x1234567890123456789012345678901234567890";

    fn uint_word(value: u64) -> Vec<u8> {
        let mut word = vec![0u8; 32];
        word[24..].copy_from_slice(&value.to_be_bytes());
        word
    }

    fn receipt(status: &str) -> TransactionReceipt {
        TransactionReceipt {
            transaction_hash: "0xfeed".into(),
            block_number: Some("0x1".into()),
            status: Some(status.into()),
        }
    }

    #[tokio::test]
    async fn test_mint_sends_zero_argument_call() {
        let nft = NftContract::new(ContractAddresses::default().nft);

        let mut provider = MockWalletProvider::new();
        provider
            .expect_send_transaction()
            .withf(|tx| {
                tx.from == OWNER
                    && tx.to == "0x4c71fb79cdc312ffc504960fbb0248d0fb9255fb"
                    && tx.data == "0x1249c58b"
            })
            .times(1)
            .returning(|_| Ok("0xfeed".into()));
        provider
            .expect_wait_for_receipt()
            .withf(|hash| hash == "0xfeed")
            .times(1)
            .returning(|_| Ok(receipt("0x1")));

        let result = nft.mint(&provider, OWNER).await.unwrap();
        assert_eq!(result.transaction_hash, "0xfeed");
    }

    #[tokio::test]
    async fn test_claim_reverted() {
        let token = TokenContract::new(ContractAddresses::default().token);

        let mut provider = MockWalletProvider::new();
        provider
            .expect_send_transaction()
            .withf(|tx| tx.data == "0x4e71d92d")
            .returning(|_| Ok("0xfeed".into()));
        provider
            .expect_wait_for_receipt()
            .returning(|_| Ok(receipt("0x0")));

        let result = token.claim(&provider, OWNER).await;
        assert!(matches!(result, Err(ContractError::Reverted(hash)) if hash == "0xfeed"));
    }

    #[tokio::test]
    async fn test_submission_error_skips_confirmation() {
        let token = TokenContract::new(ContractAddresses::default().token);

        let mut provider = MockWalletProvider::new();
        provider.expect_send_transaction().returning(|_| {
            Err(RpcError::Rpc {
                code: 4001,
                message: "User rejected the request.".into(),
            })
        });
        provider.expect_wait_for_receipt().never();

        assert!(matches!(
            token.claim(&provider, OWNER).await,
            Err(ContractError::Rpc(_))
        ));
    }

    #[tokio::test]
    async fn test_formatted_balance() {
        let token = TokenContract::new(ContractAddresses::default().token);
        let owner: Address = OWNER.parse().unwrap();

        let mut reader = MockChainReader::new();
        reader
            .expect_call()
            .withf(|_, data| data.len() == 36 && data[..4] == [0x70, 0xa0, 0x82, 0x31])
            .returning(|_, _| Ok(uint_word(2_500_000_000_000_000_000)));

        let balance = token.formatted_balance_of(&reader, &owner).await.unwrap();
        assert_eq!(balance, "2.5");
    }

    #[tokio::test]
    async fn test_name_decode_error() {
        let token = TokenContract::new(ContractAddresses::default().token);

        let mut reader = MockChainReader::new();
        reader.expect_call().returning(|_, _| Ok(vec![0u8; 8]));

        assert!(matches!(
            token.name(&reader).await,
            Err(ContractError::Decode(_))
        ));
    }
}
