//! Mint command

use anyhow::Result;

use avalplay_core::AppConfig;

use super::{build_controller, render_view};

/// Run the mint command
pub async fn run(config: &AppConfig) -> Result<()> {
    let controller = build_controller(config).await?;

    if controller.connect().await.is_err() {
        return Ok(());
    }

    println!();
    println!("Minting NFT...");
    let _ = controller.mint_nft().await;

    render_view(&controller.view().await);
    Ok(())
}
