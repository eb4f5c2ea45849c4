mod mailer;
mod notification;

pub use self::mailer::SmtpMailer;
pub use self::notification::NotificationService;
