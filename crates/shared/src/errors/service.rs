use thiserror::Error;

/// Failures on the path from a notification request to the mail relay.
///
/// Connection, TLS upgrade, authentication, and submission failures all land
/// in `Smtp` — the service does not distinguish them (single generic failure
/// surfaced to callers, real cause logged).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Template error: {0}")]
    Template(String),

    #[error("Invalid mailbox: {0}")]
    Mailbox(String),

    #[error("Smtp error: {0}")]
    Smtp(String),

    #[error("Custom error: {0}")]
    Custom(String),
}
