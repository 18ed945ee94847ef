//! Core types for the AvalPlay wallet session.
//!
//! This crate holds everything that does not talk to the network:
//!
//! - The fixed Fuji network parameters and chain-id helpers
//! - Contract addresses and the minimal ABI encoding the page needs
//! - Token unit formatting
//! - The session view-state record and its rendering rules
//! - Configuration and the session error taxonomy

pub mod abi;
pub mod address;
pub mod config;
pub mod contracts;
pub mod error;
pub mod network;
pub mod session;
pub mod units;

pub use address::Address;
pub use config::AppConfig;
pub use contracts::ContractAddresses;
pub use error::{Precondition, SessionError};
pub use network::{NetworkParams, FUJI_TESTNET};
pub use session::{
    Notification, NotificationLevel, Operation, OperationStatus, Session, SessionView,
    TokenSnapshot,
};
pub use units::{format_units, TOKEN_DECIMALS};
