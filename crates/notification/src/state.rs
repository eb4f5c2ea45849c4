use crate::{
    abstract_trait::{DynMailerService, DynNotificationService},
    service::{NotificationService, SmtpMailer},
};
use anyhow::{Context, Result};
use shared::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub notification: DynNotificationService,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let mailer = Arc::new(
            SmtpMailer::new(&config.email).context("Failed to create SMTP mailer")?,
        ) as DynMailerService;

        let notification = Arc::new(NotificationService::new(mailer)) as DynNotificationService;

        Ok(Self { notification })
    }
}
