use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
}

impl EmailConfig {
    pub fn init() -> Result<Self> {
        let smtp_host =
            std::env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string());
        let smtp_port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .context("SMTP_PORT must be a valid u16 integer")?;
        let smtp_user =
            std::env::var("SMTP_USER").context("Missing environment variable: SMTP_USER")?;
        let smtp_pass =
            std::env::var("SMTP_PASS").context("Missing environment variable: SMTP_PASS")?;

        Ok(Self {
            smtp_server: smtp_host,
            smtp_port,
            smtp_user,
            smtp_pass,
        })
    }
}

/// Sibling-service endpoints declared process-wide for the larger system.
/// This service carries them in its configuration but does not call them.
#[derive(Debug, Clone)]
pub struct ServiceUrls {
    pub transaction: String,
    pub banking: String,
    pub otp: String,
}

impl ServiceUrls {
    pub fn init() -> Self {
        let transaction = std::env::var("TRANSACTION_SERVICE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        let banking =
            std::env::var("BANKING_URL").unwrap_or_else(|_| "http://127.0.0.1:8001/".to_string());
        let otp = std::env::var("OTP_URL").unwrap_or_else(|_| "http://127.0.0.1:8002/".to_string());

        Self {
            transaction,
            banking,
            otp,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub email: EmailConfig,
    pub service_urls: ServiceUrls,
}

impl Config {
    pub fn init() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8003".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let email = EmailConfig::init().context("failed email config")?;
        let service_urls = ServiceUrls::init();

        Ok(Self {
            host,
            port,
            email,
            service_urls,
        })
    }
}
