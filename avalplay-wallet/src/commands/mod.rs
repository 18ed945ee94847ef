//! CLI Commands
//!
//! Each one-shot command opens a fresh page session: it connects first, then
//! runs its action. `shell` keeps one session open interactively.

pub mod balance;
pub mod claim;
pub mod connect;
pub mod mint;
pub mod shell;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use avalplay_core::{AppConfig, SessionView};

use crate::controller::WalletSessionController;
use crate::notify::ConsoleNotifier;
use crate::provider::{RpcChainReader, RpcWalletProvider, WalletProvider};
use crate::rpc::RpcClient;

pub const TITLE: &str = "AvalPlay";
pub const TAGLINE: &str = "A modular Web3 gaming platform on Avalanche";

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("\x1b[31mError:\x1b[0m {}", message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("\x1b[32m{}\x1b[0m", message);
}

/// Build a controller from configuration, probing for the wallet provider.
pub async fn build_controller(config: &AppConfig) -> Result<WalletSessionController> {
    let timeout = Duration::from_secs(config.network.request_timeout_secs);
    let poll_interval = Duration::from_millis(config.wallet.receipt_poll_interval_ms);

    let rpc = RpcClient::new(&config.network.rpc_url, timeout)?;
    info!("Reading chain state via {}", rpc.url());
    let reader = RpcChainReader::new(rpc);

    let provider = match config.wallet.provider_url() {
        Some(url) => RpcWalletProvider::detect(url, timeout, poll_interval)
            .await
            .map(|p| Arc::new(p) as Arc<dyn WalletProvider>),
        None => {
            info!("Wallet provider disabled by configuration");
            None
        }
    };

    Ok(
        WalletSessionController::new(provider, Arc::new(reader), Arc::new(ConsoleNotifier))
            .with_contracts(config.contracts),
    )
}

/// Render the page header.
pub fn render_header() {
    println!();
    println!("\x1b[1m{}\x1b[0m", TITLE);
    println!("{}", TAGLINE);
}

/// Render the buttons and balance line.
pub fn render_view(view: &SessionView) {
    println!();
    for line in view_lines(view) {
        println!("{}", line);
    }
}

/// The lines `render_view` prints.
pub fn view_lines(view: &SessionView) -> Vec<String> {
    let disabled = if view.is_busy() { " (disabled)" } else { "" };
    let mut lines = vec![format!(
        "  [ {} ]  [ {} ]{}  [ {} ]{}",
        view.connect_label(),
        view.mint_label(),
        disabled,
        view.claim_label(),
        disabled
    )];
    if let Some(balance) = view.balance_line() {
        lines.push(format!("  {}", balance));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use avalplay_core::{Operation, OperationStatus};

    #[test]
    fn test_view_lines_disconnected() {
        let view = SessionView::new();
        assert_eq!(
            view_lines(&view),
            vec!["  [ Connect Wallet ]  [ Mint NFT ]  [ Claim Tokens ]".to_string()]
        );
    }

    #[test]
    fn test_view_lines_busy_and_connected() {
        let mut view = SessionView::new();
        view.set_connected("0xabcdef0000000000000000000000000000000000".into());
        view.set_token("AvalPlay Token".into(), "10.0".into());
        view.set_status(Operation::Claim, OperationStatus::InProgress);

        assert_eq!(
            view_lines(&view),
            vec![
                "  [ Connected: 0xabcd... ]  [ Mint NFT ] (disabled)  [ Claiming... ] (disabled)"
                    .to_string(),
                "  Token Balance: 10.0 AvalPlay Token".to_string(),
            ]
        );
    }
}
