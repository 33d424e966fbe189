//! One-shot SMTP relay.
//!
//! Credentials come from the environment; when any of them is missing the
//! service stays up but every send fails with a configuration error. A
//! configured admin address overrides the requested recipient so the relay
//! cannot be used to mail arbitrary parties.

use std::time::Duration;

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{info, warn};

use crate::backend::domain::errors::{DomainError, DomainResult};

const SEND_TIMEOUT: Duration = Duration::from_secs(10);
const NOT_CONFIGURED: &str =
    "SMTP not configured. Set SMTP_HOST, SMTP_USER, SMTP_PASS in environment variables.";

#[derive(Debug, Clone, Default)]
pub struct EmailConfig {
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
    /// When set, every outbound mail goes here regardless of the requested
    /// recipient
    pub admin_email: Option<String>,
}

/// Snapshot of the relay state for the health endpoint. Carries flags only;
/// the admin address itself never leaves the service.
#[derive(Debug, Clone, Copy)]
pub struct EmailHealth {
    pub configured: bool,
    pub admin_email_set: bool,
}

pub struct EmailService {
    config: EmailConfig,
    transport: Option<SmtpTransport>,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        let transport = match Self::build_transport(&config) {
            Ok(transport) => transport,
            Err(e) => {
                warn!("SMTP transport setup failed, relay disabled: {e}");
                None
            }
        };
        Self { config, transport }
    }

    fn build_transport(config: &EmailConfig) -> Result<Option<SmtpTransport>, lettre::transport::smtp::Error> {
        let (Some(host), Some(user), Some(pass)) = (
            config.smtp_host.as_deref(),
            config.smtp_user.as_deref(),
            config.smtp_pass.as_deref(),
        ) else {
            return Ok(None);
        };

        let transport = SmtpTransport::starttls_relay(host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(user.to_string(), pass.to_string()))
            .timeout(Some(SEND_TIMEOUT))
            .build();
        Ok(Some(transport))
    }

    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    pub fn health(&self) -> EmailHealth {
        EmailHealth {
            configured: self.is_configured(),
            admin_email_set: self.config.admin_email.is_some(),
        }
    }

    /// Relay one message. The configured admin address, when present, wins
    /// over the requested recipient. Blocks for up to the send timeout.
    pub fn send(
        &self,
        to: Option<&str>,
        subject: Option<&str>,
        body: Option<&str>,
    ) -> DomainResult<()> {
        let recipient = self
            .config
            .admin_email
            .as_deref()
            .or(to)
            .map(str::trim)
            .filter(|v| !v.is_empty());
        let subject = subject.map(str::trim).filter(|v| !v.is_empty());
        let body = body.map(str::trim).filter(|v| !v.is_empty());

        let (Some(recipient), Some(subject), Some(body)) = (recipient, subject, body) else {
            return Err(DomainError::Validation(
                "Missing required fields: to, subject, body".to_string(),
            ));
        };

        let Some(transport) = &self.transport else {
            return Err(DomainError::Transport(NOT_CONFIGURED.to_string()));
        };

        // smtp_user is present whenever the transport is
        let sender = self.config.smtp_user.as_deref().unwrap_or_default();
        let from: Mailbox = sender
            .parse()
            .map_err(|e| DomainError::Validation(format!("invalid sender address: {e}")))?;
        let to: Mailbox = recipient
            .parse()
            .map_err(|e| DomainError::Validation(format!("invalid recipient address: {e}")))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| DomainError::Validation(format!("could not build message: {e}")))?;

        // Single attempt; the caller decides whether to retry
        transport
            .send(&message)
            .map_err(|e| DomainError::Transport(e.to_string()))?;
        info!("Relayed email to {recipient}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> EmailService {
        EmailService::new(EmailConfig {
            smtp_port: 587,
            ..Default::default()
        })
    }

    #[test]
    fn missing_credentials_leave_relay_unconfigured() {
        let service = unconfigured();
        assert!(!service.is_configured());

        let health = service.health();
        assert!(!health.configured);
        assert!(!health.admin_email_set);
    }

    #[test]
    fn health_reports_admin_presence_without_the_address() {
        let service = EmailService::new(EmailConfig {
            admin_email: Some("admin@gan.example".to_string()),
            smtp_port: 587,
            ..Default::default()
        });
        assert!(service.health().admin_email_set);
    }

    #[test]
    fn missing_fields_fail_validation_before_transport() {
        let service = unconfigured();
        let result = service.send(Some("a@b.example"), None, Some("body"));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn unconfigured_send_reports_the_setup_hint() {
        let service = unconfigured();
        let result = service.send(Some("a@b.example"), Some("subject"), Some("body"));
        match result {
            Err(DomainError::Transport(message)) => {
                assert!(message.contains("SMTP not configured"));
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn admin_address_satisfies_the_recipient_requirement() {
        let service = EmailService::new(EmailConfig {
            admin_email: Some("admin@gan.example".to_string()),
            smtp_port: 587,
            ..Default::default()
        });
        // Recipient is resolved from the admin address, so the failure is
        // the unconfigured transport rather than validation
        let result = service.send(None, Some("subject"), Some("body"));
        assert!(matches!(result, Err(DomainError::Transport(_))));
    }
}
