use crate::{abstract_trait::MailerServiceTrait, domain::EmailRequest};

use shared::{config::EmailConfig, errors::ServiceError, utils::render_email};

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
    message::{Mailbox, Message, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::{error, info};

type SmtpTransport = AsyncSmtpTransport<Tokio1Executor>;

/// Relay client: plaintext connect, STARTTLS upgrade, then username/password
/// authentication. One submission per `send` call, no pooling across requests
/// kept by this service.
#[derive(Clone)]
pub struct SmtpMailer {
    mailer: SmtpTransport,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> Result<Self, ServiceError> {
        let creds = Credentials::new(config.smtp_user.clone(), config.smtp_pass.clone());

        let mailer = SmtpTransport::starttls_relay(&config.smtp_server)
            .map_err(|e| ServiceError::Smtp(format!("Failed to create SMTP relay: {e}")))?
            .credentials(creds)
            .port(config.smtp_port)
            .build();

        // messages go out from the authenticated account itself
        let from: Mailbox = config
            .smtp_user
            .parse()
            .map_err(|e| ServiceError::Mailbox(format!("Invalid sender email: {e}")))?;

        Ok(Self { mailer, from })
    }
}

#[async_trait]
impl MailerServiceTrait for SmtpMailer {
    async fn send(&self, req: &EmailRequest) -> Result<(), ServiceError> {
        let body = render_email(&req.data).map_err(|e| ServiceError::Template(e.to_string()))?;

        let to: Mailbox = req.to.parse().map_err(|e| {
            error!("❌ Invalid recipient email: {}", e);
            ServiceError::Mailbox(format!("Invalid recipient email: {e}"))
        })?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&req.subject)
            .header(ContentType::TEXT_HTML)
            .body(body)
            .map_err(|e| {
                error!("❌ Failed to build email: {}", e);
                ServiceError::Custom(format!("Failed to build email: {e}"))
            })?;

        match self.mailer.send(email).await {
            Ok(_) => {
                info!("✅ Email sent to {}", req.to);
                Ok(())
            }
            Err(e) => {
                error!("❌ Failed to send email to {}: {}", req.to, e);
                Err(ServiceError::Smtp(format!("Failed to send email: {e}")))
            }
        }
    }
}
