//! Environment-driven configuration.
//!
//! Everything is optional; missing SMTP settings leave the mail relay
//! unconfigured rather than failing startup.

use std::env;
use std::path::PathBuf;

use crate::backend::domain::email_service::EmailConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Directory holding the JSON slot files
    pub data_directory: PathBuf,
    pub email: EmailConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let data_directory = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let smtp_port = env::var("SMTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SMTP_PORT);

        let email = EmailConfig {
            smtp_host: env::var("SMTP_HOST").ok().filter(|v| !v.is_empty()),
            smtp_port,
            smtp_user: env::var("SMTP_USER").ok().filter(|v| !v.is_empty()),
            smtp_pass: env::var("SMTP_PASS").ok().filter(|v| !v.is_empty()),
            admin_email: env::var("ADMIN_EMAIL").ok().filter(|v| !v.is_empty()),
        };

        Self {
            port,
            data_directory,
            email,
        }
    }
}
