use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    EmailRequest,
    requests::{ConfirmPaymentRequest, SendOtpRequest},
};
use shared::errors::ServiceError;

pub type DynMailerService = Arc<dyn MailerServiceTrait>;
pub type DynNotificationService = Arc<dyn NotificationServiceTrait>;

/// One call is one relay delivery attempt: connect, upgrade, authenticate,
/// submit. No retries.
#[async_trait]
pub trait MailerServiceTrait: Send + Sync {
    async fn send(&self, req: &EmailRequest) -> Result<(), ServiceError>;
}

#[async_trait]
pub trait NotificationServiceTrait: Send + Sync {
    async fn send_otp(&self, req: &SendOtpRequest) -> Result<(), ServiceError>;
    async fn confirm_payment(&self, req: &ConfirmPaymentRequest) -> Result<(), ServiceError>;
}
