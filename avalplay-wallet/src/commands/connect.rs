//! Connect command

use anyhow::Result;

use avalplay_core::AppConfig;

use super::{build_controller, render_view};

/// Run the connect command
pub async fn run(config: &AppConfig) -> Result<()> {
    let controller = build_controller(config).await?;

    println!();
    println!("Connecting wallet...");

    // Failures were already shown to the user.
    if controller.connect().await.is_ok() {
        let network = controller.network();
        match controller.current_chain_id().await {
            Some(chain_id) if network.matches(chain_id) => {
                println!("Active chain: {} ({:#x})", network.chain_name, chain_id);
            }
            Some(chain_id) => println!("Active chain: {:#x}", chain_id),
            None => println!("Active chain: unknown"),
        }
    }

    render_view(&controller.view().await);
    Ok(())
}
