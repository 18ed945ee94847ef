//! Interactive session
//!
//! One shell is one page session: the wallet stays connected until `quit`.

use anyhow::Result;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

use avalplay_core::AppConfig;

use super::{build_controller, print_error, render_header, render_view};

/// A line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Connect,
    Mint,
    Claim,
    Balance,
    Status,
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "connect" | "c" => Some(ShellCommand::Connect),
            "mint" | "m" => Some(ShellCommand::Mint),
            "claim" => Some(ShellCommand::Claim),
            "balance" | "b" => Some(ShellCommand::Balance),
            "status" | "s" | "" => Some(ShellCommand::Status),
            "help" | "h" | "?" => Some(ShellCommand::Help),
            "quit" | "exit" | "q" => Some(ShellCommand::Quit),
            _ => None,
        }
    }
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  connect   Connect your wallet and switch to Fuji");
    println!("  mint      Mint an NFT");
    println!("  claim     Claim tokens");
    println!("  balance   Refresh the token balance");
    println!("  status    Show the session");
    println!("  quit      Leave");
}

/// Run the interactive session
pub async fn run(config: &AppConfig) -> Result<()> {
    let controller = build_controller(config).await?;

    render_header();
    render_view(&controller.view().await);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let Some(command) = ShellCommand::parse(&line) else {
            print_error(&format!("Unknown command: {}", line.trim()));
            continue;
        };

        // Errors are shown by the controller's notifier.
        match command {
            ShellCommand::Connect => {
                let _ = controller.connect().await;
            }
            ShellCommand::Mint => {
                let _ = controller.mint_nft().await;
            }
            ShellCommand::Claim => {
                let _ = controller.claim_tokens().await;
            }
            ShellCommand::Balance => {
                let _ = controller.fetch_token_balance().await;
            }
            ShellCommand::Status => {}
            ShellCommand::Help => {
                print_help();
                continue;
            }
            ShellCommand::Quit => break,
        }

        render_view(&controller.view().await);
    }

    Ok(())
}
