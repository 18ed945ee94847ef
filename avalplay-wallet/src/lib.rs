//! AvalPlay Wallet Session
//!
//! Connects to an external EIP-1193 wallet over JSON-RPC, switches it to the
//! Avalanche Fuji testnet, mints an NFT and claims tokens from two fixed
//! contracts, and tracks the resulting token balance.
//!
//! ## Trust Model
//!
//! - Keys stay in the wallet; this crate never signs anything itself
//! - Balance and name reads go through a plain RPC node, no signer needed
//! - Contracts are opaque: only `mint`, `claim`, `balanceOf` and `name` are
//!   ever called

pub mod contracts;
pub mod controller;
pub mod notify;
pub mod provider;
pub mod rpc;

pub mod commands;

pub use controller::WalletSessionController;
pub use notify::{ConsoleNotifier, Notifier};
pub use provider::{ChainReader, RpcChainReader, RpcWalletProvider, WalletProvider};
pub use rpc::{RpcClient, RpcError};
