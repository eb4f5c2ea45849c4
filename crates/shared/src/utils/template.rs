use askama::{Error, Template};
use tracing::{error, info};

/// Payload for one rendered notification body.
///
/// Caller-supplied fields reach the HTML verbatim: the templates mark every
/// interpolation `|safe`, so nothing is escaped.
#[derive(Debug, Clone)]
pub enum EmailTemplateData {
    Otp {
        customer_name: String,
        otp_code: String,
        transaction_id: i64,
    },
    PaymentConfirmation {
        customer_name: String,
    },
}

#[derive(Template, Debug)]
#[template(path = "otp.html")]
pub struct OtpEmailTemplate<'a> {
    pub customer_name: &'a str,
    pub otp_code: &'a str,
    pub transaction_id: i64,
}

#[derive(Template, Debug)]
#[template(path = "payment_confirmation.html")]
pub struct PaymentConfirmationTemplate<'a> {
    pub customer_name: &'a str,
}

pub fn render_email(data: &EmailTemplateData) -> Result<String, Error> {
    let rendered = match data {
        EmailTemplateData::Otp {
            customer_name,
            otp_code,
            transaction_id,
        } => OtpEmailTemplate {
            customer_name,
            otp_code,
            transaction_id: *transaction_id,
        }
        .render(),
        EmailTemplateData::PaymentConfirmation { customer_name } => {
            PaymentConfirmationTemplate { customer_name }.render()
        }
    };

    match rendered {
        Ok(html) => {
            info!("✅ Successfully rendered email template.");
            Ok(html)
        }
        Err(e) => {
            error!("❌ Failed to render email template: {}", e);
            Err(e)
        }
    }
}
