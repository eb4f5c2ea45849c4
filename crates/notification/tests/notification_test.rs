use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use notification::{
    abstract_trait::{DynMailerService, DynNotificationService, MailerServiceTrait},
    domain::EmailRequest,
    handler::AppRouter,
    service::NotificationService,
    state::AppState,
};
use serde_json::{Value, json};
use shared::{errors::ServiceError, utils::render_email};
use tower::ServiceExt;

/// Stands in for the SMTP relay: records every delivery attempt, optionally
/// rejecting each one the way a relay rejects bad credentials.
#[derive(Clone, Default)]
struct RecordingMailer {
    sent: Arc<Mutex<Vec<EmailRequest>>>,
    reject: bool,
}

impl RecordingMailer {
    fn rejecting() -> Self {
        Self {
            reject: true,
            ..Default::default()
        }
    }

    fn attempts(&self) -> Vec<EmailRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailerServiceTrait for RecordingMailer {
    async fn send(&self, req: &EmailRequest) -> Result<(), ServiceError> {
        self.sent.lock().unwrap().push(req.clone());

        if self.reject {
            return Err(ServiceError::Smtp("535 authentication rejected".into()));
        }

        Ok(())
    }
}

fn test_app(mailer: RecordingMailer) -> Router {
    let service = Arc::new(NotificationService::new(
        Arc::new(mailer) as DynMailerService
    )) as DynNotificationService;

    AppRouter::build(Arc::new(AppState {
        notification: service,
    }))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_returns_status_message_without_touching_the_relay() {
    let mailer = RecordingMailer::default();
    let app = test_app(mailer.clone());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Email Service Running!");
    assert!(mailer.attempts().is_empty());
}

#[tokio::test]
async fn send_otp_relays_exactly_once() {
    let mailer = RecordingMailer::default();
    let app = test_app(mailer.clone());

    let response = app
        .oneshot(post_json(
            "/send-otp",
            json!({"transaction_id": 42, "email": "a@b.com", "otp_code": "123456"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body.get("message").is_none());

    let attempts = mailer.attempts();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].to, "a@b.com");
    assert!(attempts[0].subject.contains("42"));

    let html = render_email(&attempts[0].data).unwrap();
    assert!(html.contains("123456"));
    assert!(html.contains("Hi Customer,"));
}

#[tokio::test]
async fn send_otp_uses_provided_customer_name() {
    let mailer = RecordingMailer::default();
    let app = test_app(mailer.clone());

    let response = app
        .oneshot(post_json(
            "/send-otp",
            json!({
                "transaction_id": 1,
                "email": "a@b.com",
                "otp_code": "999999",
                "customer_name": "Alice"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let attempts = mailer.attempts();
    let html = render_email(&attempts[0].data).unwrap();
    assert!(html.contains("Hi Alice,"));
}

#[tokio::test]
async fn send_otp_missing_field_is_rejected_before_the_relay() {
    let mailer = RecordingMailer::default();
    let app = test_app(mailer.clone());

    let response = app
        .oneshot(post_json(
            "/send-otp",
            json!({"email": "a@b.com", "otp_code": "123456"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(mailer.attempts().is_empty());
}

#[tokio::test]
async fn send_otp_malformed_json_is_rejected_before_the_relay() {
    let mailer = RecordingMailer::default();
    let app = test_app(mailer.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/send-otp")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(mailer.attempts().is_empty());
}

#[tokio::test]
async fn send_otp_relay_failure_is_an_opaque_500() {
    let mailer = RecordingMailer::rejecting();
    let app = test_app(mailer.clone());

    let response = app
        .oneshot(post_json(
            "/send-otp",
            json!({"transaction_id": 42, "email": "a@b.com", "otp_code": "123456"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Email failed");

    // relay-internal detail never reaches the caller
    let raw = body.to_string();
    assert!(!raw.contains("535"));
    assert!(!raw.contains("authentication"));
}

#[tokio::test]
async fn confirm_returns_confirmation_message() {
    let mailer = RecordingMailer::default();
    let app = test_app(mailer.clone());

    let response = app
        .oneshot(post_json(
            "/confirm",
            json!({"transaction_id": 7, "email": "a@b.com", "customer_name": "Alice"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Confirmation sent!");

    let attempts = mailer.attempts();
    assert_eq!(attempts.len(), 1);
    assert!(attempts[0].subject.contains("7"));

    let html = render_email(&attempts[0].data).unwrap();
    assert!(html.contains("Hi <strong>Alice</strong>,"));
}

#[tokio::test]
async fn confirm_relay_failure_is_an_opaque_500() {
    let mailer = RecordingMailer::rejecting();
    let app = test_app(mailer.clone());

    let response = app
        .oneshot(post_json(
            "/confirm",
            json!({"transaction_id": 7, "email": "a@b.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Failed to send confirmation");
}

#[tokio::test]
async fn confirm_missing_email_is_rejected_before_the_relay() {
    let mailer = RecordingMailer::default();
    let app = test_app(mailer.clone());

    let response = app
        .oneshot(post_json("/confirm", json!({"transaction_id": 7})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(mailer.attempts().is_empty());
}
