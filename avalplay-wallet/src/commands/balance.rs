//! Balance check command

use anyhow::Result;

use avalplay_core::AppConfig;

use super::{build_controller, print_success};

/// Run the balance command
pub async fn run(config: &AppConfig) -> Result<()> {
    let controller = build_controller(config).await?;

    if controller.connect().await.is_err() {
        return Ok(());
    }

    let view = controller.view().await;
    println!();
    match view.balance_line() {
        Some(line) => print_success(&line),
        None => println!("Token balance unavailable"),
    }
    let token = view.token();
    if !token.name.is_empty() {
        println!("{} at {}", token.name, config.contracts.token);
    }
    Ok(())
}
