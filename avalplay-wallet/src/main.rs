//! AvalPlay CLI
//!
//! Connect a wallet, switch to Fuji, mint an NFT and claim tokens.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use avalplay_core::AppConfig;
use avalplay_wallet::commands;

#[derive(Parser)]
#[command(name = "avalplay")]
#[command(about = "AvalPlay - mint NFTs and claim tokens on Avalanche Fuji")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Wallet provider JSON-RPC endpoint (overrides the config file)
    #[arg(long, global = true)]
    provider_url: Option<String>,

    /// Run without any wallet provider
    #[arg(long, global = true, conflicts_with = "provider_url")]
    no_provider: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default)
    Shell,

    /// Connect the wallet and switch to Fuji
    Connect,

    /// Mint an NFT
    Mint,

    /// Claim tokens
    Claim,

    /// Show the token balance
    Balance,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            AppConfig::from_file(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(url) = cli.provider_url {
        config.wallet.provider_url = Some(url);
    }
    if cli.no_provider {
        config.wallet.provider_url = None;
    }

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::shell::run(&config).await,
        Commands::Connect => commands::connect::run(&config).await,
        Commands::Mint => commands::mint::run(&config).await,
        Commands::Claim => commands::claim::run(&config).await,
        Commands::Balance => commands::balance::run(&config).await,
    }
}
