//! Session view-state.
//!
//! [`SessionView`] is the one record the page renders from. It is owned by
//! the session controller and only changed through the setters below.

use std::fmt;

/// Fallback token label shown before the contract's name is known.
pub const DEFAULT_TOKEN_LABEL: &str = "$AVAL";

/// Number of address characters shown on the connect button.
const ADDRESS_PREFIX_LEN: usize = 6;

/// The two mutating actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Mint,
    Claim,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Mint => write!(f, "mint"),
            Operation::Claim => write!(f, "claim"),
        }
    }
}

/// Status of one mutating action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OperationStatus {
    #[default]
    Idle,
    InProgress,
}

/// Wallet connection. There is no disconnect; a session ends with the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub connected: bool,
    pub address: String,
}

/// Last fetched token name and balance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSnapshot {
    pub name: String,
    /// `None` until the first successful fetch.
    pub balance_formatted: Option<String>,
}

/// Everything the page shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionView {
    session: Session,
    mint_status: OperationStatus,
    claim_status: OperationStatus,
    token: TokenSnapshot,
}

impl SessionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> &TokenSnapshot {
        &self.token
    }

    pub fn is_connected(&self) -> bool {
        self.session.connected
    }

    pub fn address(&self) -> Option<&str> {
        if self.session.connected && !self.session.address.is_empty() {
            Some(&self.session.address)
        } else {
            None
        }
    }

    pub fn status(&self, operation: Operation) -> OperationStatus {
        match operation {
            Operation::Mint => self.mint_status,
            Operation::Claim => self.claim_status,
        }
    }

    /// Whether any mutating action is running.
    pub fn is_busy(&self) -> bool {
        self.mint_status == OperationStatus::InProgress
            || self.claim_status == OperationStatus::InProgress
    }

    pub fn set_connected(&mut self, address: String) {
        self.session = Session {
            connected: true,
            address,
        };
    }

    pub fn set_status(&mut self, operation: Operation, status: OperationStatus) {
        match operation {
            Operation::Mint => self.mint_status = status,
            Operation::Claim => self.claim_status = status,
        }
    }

    /// Replace the snapshot wholesale.
    pub fn set_token(&mut self, name: String, balance_formatted: String) {
        self.token = TokenSnapshot {
            name,
            balance_formatted: Some(balance_formatted),
        };
    }

    pub fn connect_label(&self) -> String {
        match self.address() {
            Some(address) => {
                let prefix: String = address.chars().take(ADDRESS_PREFIX_LEN).collect();
                format!("Connected: {}...", prefix)
            }
            None => "Connect Wallet".to_string(),
        }
    }

    pub fn mint_label(&self) -> &'static str {
        match self.mint_status {
            OperationStatus::InProgress => "Minting...",
            OperationStatus::Idle => "Mint NFT",
        }
    }

    pub fn claim_label(&self) -> &'static str {
        match self.claim_status {
            OperationStatus::InProgress => "Claiming...",
            OperationStatus::Idle => "Claim Tokens",
        }
    }

    /// Balance line, shown once connected and a balance has been fetched.
    pub fn balance_line(&self) -> Option<String> {
        if !self.session.connected {
            return None;
        }
        let balance = self.token.balance_formatted.as_ref()?;
        let label = if self.token.name.is_empty() {
            DEFAULT_TOKEN_LABEL
        } else {
            self.token.name.as_str()
        };
        Some(format!("Token Balance: {} {}", balance, label))
    }
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}
