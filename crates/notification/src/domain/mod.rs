pub mod requests;
pub mod responses;

use shared::utils::EmailTemplateData;

/// A composed message handed to the mail relay client.
#[derive(Debug, Clone)]
pub struct EmailRequest {
    pub to: String,
    pub subject: String,
    pub data: EmailTemplateData,
}
