//! Session error taxonomy.

use thiserror::Error;

use crate::session::Operation;

/// Why a mint or claim was refused before anything was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Precondition {
    /// No wallet session yet.
    NotConnected,
    /// The wallet is on another chain, or its chain could not be read.
    WrongNetwork { expected: u64, actual: Option<u64> },
}

/// Errors produced by the wallet session.
///
/// Every variant except `BalanceFetchFailed` and `OperationInProgress` is
/// shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No wallet provider available")]
    ProviderMissing,

    #[error("Wallet connection rejected: {0}")]
    ConnectionRejected(String),

    #[error("Network switch failed: {0}")]
    NetworkSwitchFailed(String),

    #[error("Precondition not met: {}", describe_precondition(.0))]
    PreconditionUnmet(Precondition),

    #[error("{operation} transaction failed: {reason}")]
    TransactionFailed { operation: Operation, reason: String },

    #[error("Token balance fetch failed: {0}")]
    BalanceFetchFailed(String),

    #[error("{0} rejected: another operation is in progress")]
    OperationInProgress(Operation),
}

fn describe_precondition(precondition: &Precondition) -> String {
    match precondition {
        Precondition::NotConnected => "wallet not connected".to_string(),
        Precondition::WrongNetwork {
            expected,
            actual: Some(actual),
        } => format!("on chain {:#x}, expected {:#x}", actual, expected),
        Precondition::WrongNetwork {
            expected,
            actual: None,
        } => format!("active chain unknown, expected {:#x}", expected),
    }
}

impl SessionError {
    /// Short message for the transient notification, if this error is shown
    /// to the user at all.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            SessionError::ProviderMissing => {
                Some("Wallet provider not found. Please install or start one.")
            }
            SessionError::ConnectionRejected(_) => Some("Failed to connect wallet"),
            SessionError::NetworkSwitchFailed(_) => Some("Error switching to Fuji network"),
            SessionError::PreconditionUnmet(Precondition::NotConnected) => {
                Some("Connect your wallet first")
            }
            SessionError::PreconditionUnmet(Precondition::WrongNetwork { .. }) => {
                Some("Please switch to Fuji Testnet network")
            }
            SessionError::TransactionFailed {
                operation: Operation::Mint,
                ..
            } => Some("Minting failed"),
            SessionError::TransactionFailed {
                operation: Operation::Claim,
                ..
            } => Some("Claim failed"),
            SessionError::BalanceFetchFailed(_) | SessionError::OperationInProgress(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_errors_have_no_message() {
        assert!(SessionError::BalanceFetchFailed("boom".into())
            .user_message()
            .is_none());
        assert!(SessionError::OperationInProgress(Operation::Mint)
            .user_message()
            .is_none());
    }

    #[test]
    fn test_provider_missing_and_rejected_are_distinct() {
        let missing = SessionError::ProviderMissing.user_message();
        let rejected = SessionError::ConnectionRejected("denied".into()).user_message();
        assert_eq!(
            missing,
            Some("Wallet provider not found. Please install or start one.")
        );
        assert_eq!(rejected, Some("Failed to connect wallet"));
    }

    #[test]
    fn test_transaction_failure_messages() {
        let mint = SessionError::TransactionFailed {
            operation: Operation::Mint,
            reason: "reverted".into(),
        };
        let claim = SessionError::TransactionFailed {
            operation: Operation::Claim,
            reason: "reverted".into(),
        };
        assert_eq!(mint.user_message(), Some("Minting failed"));
        assert_eq!(claim.user_message(), Some("Claim failed"));
        assert_eq!(mint.to_string(), "mint transaction failed: reverted");
    }

    #[test]
    fn test_wrong_network_display() {
        let err = SessionError::PreconditionUnmet(Precondition::WrongNetwork {
            expected: 0xa869,
            actual: Some(1),
        });
        assert_eq!(
            err.to_string(),
            "Precondition not met: on chain 0x1, expected 0xa869"
        );
    }
}
