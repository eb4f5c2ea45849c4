use anyhow::{Context, Result};
use dotenv::dotenv;
use notification::app::NotificationServiceApp;
use shared::{config::Config, utils::init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("notification-service", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let app = NotificationServiceApp::new(config);
    app.run().await?;

    info!("✅ Notification Service shutdown gracefully.");

    Ok(())
}
