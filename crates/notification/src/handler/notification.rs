use crate::{
    abstract_trait::DynNotificationService,
    domain::{
        requests::{ConfirmPaymentRequest, SendOtpRequest},
        responses::NotificationResponse,
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

pub async fn health_checker_handler() -> Result<impl IntoResponse, HttpError> {
    const MESSAGE: &str = "Email Service Running!";

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": MESSAGE
        })),
    ))
}

#[utoipa::path(
    post,
    path = "/send-otp",
    request_body = SendOtpRequest,
    responses(
        (status = 200, description = "OTP email relayed", body = NotificationResponse),
        (status = 422, description = "Missing or ill-typed field"),
        (status = 500, description = "Mail relay failure", body = ErrorResponse)
    ),
    tag = "Notification"
)]
pub async fn send_otp_handler(
    Extension(service): Extension<DynNotificationService>,
    SimpleValidatedJson(body): SimpleValidatedJson<SendOtpRequest>,
) -> Result<impl IntoResponse, HttpError> {
    // relay failures collapse to one opaque 500, the cause stays in the log
    if let Err(e) = service.send_otp(&body).await {
        error!(
            "❌ OTP delivery failed for transaction {}: {e}",
            body.transaction_id
        );
        return Err(HttpError::Internal("Email failed".into()));
    }

    Ok((
        StatusCode::OK,
        Json(NotificationResponse {
            success: true,
            message: None,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/confirm",
    request_body = ConfirmPaymentRequest,
    responses(
        (status = 200, description = "Confirmation email relayed", body = NotificationResponse),
        (status = 422, description = "Missing or ill-typed field"),
        (status = 500, description = "Mail relay failure", body = ErrorResponse)
    ),
    tag = "Notification"
)]
pub async fn confirm_payment_handler(
    Extension(service): Extension<DynNotificationService>,
    SimpleValidatedJson(body): SimpleValidatedJson<ConfirmPaymentRequest>,
) -> Result<impl IntoResponse, HttpError> {
    if let Err(e) = service.confirm_payment(&body).await {
        error!(
            "❌ Payment confirmation failed for transaction {}: {e}",
            body.transaction_id
        );
        return Err(HttpError::Internal("Failed to send confirmation".into()));
    }

    Ok((
        StatusCode::OK,
        Json(NotificationResponse {
            success: true,
            message: Some("Confirmation sent!".to_string()),
        }),
    ))
}

pub fn notification_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/", get(health_checker_handler))
        .route("/send-otp", post(send_otp_handler))
        .route("/confirm", post(confirm_payment_handler))
        .layer(Extension(app_state.notification.clone()))
        .with_state(app_state)
}
