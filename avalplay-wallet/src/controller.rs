//! Wallet session controller.
//!
//! Owns the session view-state and runs the page's wallet flows:
//!
//! - `connect`: account access, then network switch, then one balance refresh
//! - `switch_network`: add/activate Fuji in the wallet
//! - `mint_nft` / `claim_tokens`: precondition check, status flip, submit,
//!   confirm, status reset
//! - `fetch_token_balance`: read-only `balanceOf` + `name`, failures are
//!   logged only
//!
//! Every user-visible failure goes through the [`Notifier`] and is also
//! returned to the caller. Nothing is retried.

use std::sync::Arc;

use avalplay_core::{
    Address, ContractAddresses, NetworkParams, Operation, OperationStatus, Precondition,
    SessionError, SessionView, FUJI_TESTNET,
};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::contracts::{NftContract, TokenContract};
use crate::notify::Notifier;
use crate::provider::{ChainReader, WalletProvider};

const MINT_SUCCESS: &str = "NFT minted with success!";
const CLAIM_SUCCESS: &str = "Tokens claimed!";

/// The single controller of one page session.
pub struct WalletSessionController {
    provider: Option<Arc<dyn WalletProvider>>,
    reader: Arc<dyn ChainReader>,
    notifier: Arc<dyn Notifier>,
    network: NetworkParams,
    nft: NftContract,
    token: TokenContract,
    // Never held across a provider or reader await.
    view: Mutex<SessionView>,
}

impl WalletSessionController {
    /// Create a controller. `provider` is `None` when no wallet is available.
    pub fn new(
        provider: Option<Arc<dyn WalletProvider>>,
        reader: Arc<dyn ChainReader>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let contracts = ContractAddresses::default();
        Self {
            provider,
            reader,
            notifier,
            network: FUJI_TESTNET,
            nft: NftContract::new(contracts.nft),
            token: TokenContract::new(contracts.token),
            view: Mutex::new(SessionView::new()),
        }
    }

    /// Use different contract deployments.
    pub fn with_contracts(mut self, contracts: ContractAddresses) -> Self {
        self.nft = NftContract::new(contracts.nft);
        self.token = TokenContract::new(contracts.token);
        self
    }

    pub fn network(&self) -> &NetworkParams {
        &self.network
    }

    /// A copy of the current view-state for rendering.
    pub async fn view(&self) -> SessionView {
        self.view.lock().await.clone()
    }

    /// Connect to the wallet, switch to Fuji and load the token balance.
    pub async fn connect(&self) -> Result<(), SessionError> {
        let Some(provider) = self.provider.as_ref() else {
            warn!("Connect requested but no wallet provider is available");
            return Err(self.report(SessionError::ProviderMissing));
        };

        let accounts = match provider.request_accounts().await {
            Ok(accounts) => accounts,
            Err(e) => {
                if e.is_user_rejection() {
                    warn!("Wallet connection declined by the user");
                } else {
                    error!("Wallet connection failed: {}", e);
                }
                return Err(self.report(SessionError::ConnectionRejected(e.to_string())));
            }
        };

        let Some(address) = accounts.into_iter().next() else {
            error!("Wallet connection failed: no accounts returned");
            return Err(self.report(SessionError::ConnectionRejected(
                "no accounts returned".to_string(),
            )));
        };

        info!("Wallet connected: {}", address);
        let changed = {
            let mut view = self.view.lock().await;
            let changed = view.address() != Some(address.as_str());
            view.set_connected(address);
            changed
        };

        // A failed switch is reported inside and leaves the session in place.
        let _ = self.switch_network().await;

        // The balance follows the session: refresh only when it changed.
        if changed {
            let _ = self.fetch_token_balance().await;
        }

        Ok(())
    }

    /// Ask the wallet to add and activate the Fuji network.
    pub async fn switch_network(&self) -> Result<(), SessionError> {
        let Some(provider) = self.provider.as_ref() else {
            return Err(self.report(SessionError::ProviderMissing));
        };

        match provider.add_chain(&self.network.add_chain_request()).await {
            Ok(()) => {
                info!("Switched wallet to {}", self.network.chain_name);
                Ok(())
            }
            Err(e) => {
                error!("Error switching network: {}", e);
                Err(self.report(SessionError::NetworkSwitchFailed(e.to_string())))
            }
        }
    }

    /// The wallet's active chain, or `None` if it cannot be read.
    pub async fn current_chain_id(&self) -> Option<u64> {
        let provider = self.provider.as_ref()?;
        match provider.chain_id().await {
            Ok(chain_id) => Some(chain_id),
            Err(e) => {
                warn!("Failed to read active chain: {}", e);
                None
            }
        }
    }

    /// Mint an NFT from the connected account.
    pub async fn mint_nft(&self) -> Result<(), SessionError> {
        self.run_transaction(Operation::Mint).await?;
        self.notifier.success(MINT_SUCCESS);
        Ok(())
    }

    /// Claim tokens to the connected account, then refresh the balance.
    pub async fn claim_tokens(&self) -> Result<(), SessionError> {
        self.run_transaction(Operation::Claim).await?;
        self.notifier.success(CLAIM_SUCCESS);
        let _ = self.fetch_token_balance().await;
        Ok(())
    }

    /// Refresh the token name and balance for the connected account.
    ///
    /// Failures are logged and returned but never shown to the user; the
    /// previous snapshot stays in place.
    pub async fn fetch_token_balance(&self) -> Result<(), SessionError> {
        let address = self.view.lock().await.address().map(str::to_string);
        let Some(address) = address else {
            debug!("Skipping balance refresh: not connected");
            return Err(SessionError::BalanceFetchFailed(
                "wallet not connected".to_string(),
            ));
        };

        match self.read_token(&address).await {
            Ok((name, balance)) => {
                let mut view = self.view.lock().await;
                if view.address() != Some(address.as_str()) {
                    debug!("Dropping balance for {}: account changed mid-read", address);
                    return Ok(());
                }
                debug!("Token balance for {}: {} {}", address, balance, name);
                view.set_token(name, balance);
                Ok(())
            }
            Err(e) => {
                error!("Error fetching token balance: {}", e);
                Err(e)
            }
        }
    }

    async fn read_token(&self, address: &str) -> Result<(String, String), SessionError> {
        let owner: Address = address
            .parse()
            .map_err(|e| SessionError::BalanceFetchFailed(format!("bad address: {}", e)))?;

        let balance = self
            .token
            .formatted_balance_of(self.reader.as_ref(), &owner)
            .await
            .map_err(|e| SessionError::BalanceFetchFailed(e.to_string()))?;
        let name = self
            .token
            .name(self.reader.as_ref())
            .await
            .map_err(|e| SessionError::BalanceFetchFailed(e.to_string()))?;

        Ok((name, balance))
    }

    /// Check preconditions, flip status, submit and confirm, reset status.
    async fn run_transaction(&self, operation: Operation) -> Result<(), SessionError> {
        let (provider, from) = self.check_ready().await.map_err(|e| self.report(e))?;

        self.begin(operation).await?;

        info!("Submitting {} from {}", operation, from);
        let result = match operation {
            Operation::Mint => self.nft.mint(provider.as_ref(), &from).await,
            Operation::Claim => self.token.claim(provider.as_ref(), &from).await,
        };

        // Runs on success and failure alike.
        self.view
            .lock()
            .await
            .set_status(operation, OperationStatus::Idle);

        match result {
            Ok(receipt) => {
                info!(
                    "{} confirmed in {} (block {})",
                    operation,
                    receipt.transaction_hash,
                    receipt.block_number.as_deref().unwrap_or("?")
                );
                Ok(())
            }
            Err(e) => {
                error!("{} failed: {}", operation, e);
                Err(self.report(SessionError::TransactionFailed {
                    operation,
                    reason: e.to_string(),
                }))
            }
        }
    }

    /// Connected and on Fuji, or the precondition that failed.
    async fn check_ready(&self) -> Result<(Arc<dyn WalletProvider>, String), SessionError> {
        let address = self.view.lock().await.address().map(str::to_string);
        let (Some(provider), Some(address)) = (self.provider.clone(), address) else {
            return Err(SessionError::PreconditionUnmet(Precondition::NotConnected));
        };

        let actual = self.current_chain_id().await;
        if actual.map(|id| self.network.matches(id)) != Some(true) {
            return Err(SessionError::PreconditionUnmet(
                Precondition::WrongNetwork {
                    expected: self.network.chain_id,
                    actual,
                },
            ));
        }

        Ok((provider, address))
    }

    /// Mark `operation` in progress unless something else already is.
    async fn begin(&self, operation: Operation) -> Result<(), SessionError> {
        let mut view = self.view.lock().await;
        if view.is_busy() {
            warn!("Ignoring {}: another operation is in progress", operation);
            return Err(SessionError::OperationInProgress(operation));
        }
        view.set_status(operation, OperationStatus::InProgress);
        Ok(())
    }

    /// Notify the user if `err` is user-visible, and hand it back.
    fn report(&self, err: SessionError) -> SessionError {
        if let Some(message) = err.user_message() {
            self.notifier.error(message);
        }
        err
    }
}
