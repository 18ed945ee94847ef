//! Claim command

use anyhow::Result;

use avalplay_core::AppConfig;

use super::{build_controller, render_view};

/// Run the claim command
pub async fn run(config: &AppConfig) -> Result<()> {
    let controller = build_controller(config).await?;

    if controller.connect().await.is_err() {
        return Ok(());
    }

    println!();
    println!("Claiming tokens...");
    let _ = controller.claim_tokens().await;

    render_view(&controller.view().await);
    Ok(())
}
