use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_customer_name() -> String {
    "Customer".to_string()
}

/// Structural validation only. `email` is not checked for address shape and
/// `otp_code` is an opaque string; callers are trusted for both.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct SendOtpRequest {
    pub transaction_id: i64,

    pub email: String,

    pub otp_code: String,

    #[serde(default = "default_customer_name")]
    pub customer_name: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct ConfirmPaymentRequest {
    pub transaction_id: i64,

    pub email: String,

    #[serde(default = "default_customer_name")]
    pub customer_name: String,
}
