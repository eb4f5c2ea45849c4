use crate::{handler::AppRouter, state::AppState};
use anyhow::{Context, Result};
use shared::config::Config;
use tracing::info;

pub struct NotificationServiceApp {
    config: Config,
}

impl NotificationServiceApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<()> {
        let state = AppState::new(&self.config).context("Failed to create AppState")?;

        info!("🚀 Starting Notification Service...");

        AppRouter::serve(&self.config.host, self.config.port, state)
            .await
            .context("Failed to start server")
    }
}
