use crate::{
    abstract_trait::{DynMailerService, NotificationServiceTrait},
    domain::{
        EmailRequest,
        requests::{ConfirmPaymentRequest, SendOtpRequest},
    },
};
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::EmailTemplateData};
use tracing::info;

pub struct NotificationService {
    mailer: DynMailerService,
}

impl NotificationService {
    pub fn new(mailer: DynMailerService) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn send_otp(&self, req: &SendOtpRequest) -> Result<(), ServiceError> {
        let email = EmailRequest {
            to: req.email.clone(),
            subject: format!("Your OTP for Transaction #{}", req.transaction_id),
            data: EmailTemplateData::Otp {
                customer_name: req.customer_name.clone(),
                otp_code: req.otp_code.clone(),
                transaction_id: req.transaction_id,
            },
        };

        self.mailer.send(&email).await?;

        info!(
            "✅ OTP notification relayed for transaction {}",
            req.transaction_id
        );
        Ok(())
    }

    async fn confirm_payment(&self, req: &ConfirmPaymentRequest) -> Result<(), ServiceError> {
        let email = EmailRequest {
            to: req.email.clone(),
            subject: format!("Payment Confirmed - Transaction #{}", req.transaction_id),
            data: EmailTemplateData::PaymentConfirmation {
                customer_name: req.customer_name.clone(),
            },
        };

        self.mailer.send(&email).await?;

        info!(
            "✅ Payment confirmation relayed for transaction {}",
            req.transaction_id
        );
        Ok(())
    }
}
