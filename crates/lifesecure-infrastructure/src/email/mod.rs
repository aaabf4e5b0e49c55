//! Email notification sink.
//!
//! Two delivery transports behind one `Mailer` trait: real SMTP via lettre
//! when configured, log-only output otherwise. `EmailLeadNotifier` renders
//! the fixed lead templates and fans out to submitter and admin; failures
//! are logged and swallowed, never propagated to the intake operation.

pub mod templates;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{info, warn};

use lifesecure_core::domain::Customer;
use lifesecure_core::error::DomainError;
use lifesecure_core::notifier::LeadNotifier;
use lifesecure_shared::mask_email;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Message build error: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError>;
}

/// Log-only delivery, used when no SMTP transport is configured.
#[derive(Default)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, _html_body: &str) -> Result<(), MailError> {
        info!(to = %mask_email(to), subject, "email delivery skipped (no SMTP configured)");
        Ok(())
    }
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpMailer {
    pub fn new(smtp_url: &str, from_address: &str) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(smtp_url)?.build();
        Ok(Self {
            transport,
            from_address: from_address.to_string(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.from_address.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())?;
        self.transport.send(message).await?;
        Ok(())
    }
}

/// Fans a new lead out to the submitter and the admin inbox.
pub struct EmailLeadNotifier {
    mailer: std::sync::Arc<dyn Mailer>,
    admin_address: String,
}

impl EmailLeadNotifier {
    pub fn new(mailer: std::sync::Arc<dyn Mailer>, admin_address: &str) -> Self {
        Self {
            mailer,
            admin_address: admin_address.to_string(),
        }
    }
}

#[async_trait]
impl LeadNotifier for EmailLeadNotifier {
    async fn lead_created(&self, customer: &Customer) -> Result<(), DomainError> {
        let (subject, body) = templates::confirmation_email(customer);
        if let Err(e) = self.mailer.send(&customer.email, &subject, &body).await {
            warn!(customer_id = %customer.id, "confirmation email failed: {}", e);
        }

        let (subject, body) = templates::admin_alert_email(customer);
        if let Err(e) = self.mailer.send(&self.admin_address, &subject, &body).await {
            warn!(customer_id = %customer.id, "admin alert email failed: {}", e);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    struct RecordingMailer {
        sent: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    impl RecordingMailer {
        fn new(fail: bool) -> Self {
            Self { sent: Mutex::new(Vec::new()), fail }
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, to: &str, subject: &str, _html: &str) -> Result<(), MailError> {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string()));
            if self.fail {
                Err(MailError::Address("bad@".parse::<lettre::Address>().unwrap_err()))
            } else {
                Ok(())
            }
        }
    }

    fn customer() -> Customer {
        let now = Utc::now();
        Customer {
            id: Uuid::new_v4(),
            name: "Priya Sharma".to_string(),
            email: "priya@example.com".to_string(),
            mobile: "9876543210".to_string(),
            dob: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            status: lifesecure_core::domain::LeadStatus::Registered,
            appointment: None,
            submitted_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_notifies_submitter_and_admin() {
        let mailer = Arc::new(RecordingMailer::new(false));
        let notifier = EmailLeadNotifier::new(mailer.clone(), "admin@lifeinsurance.com");
        notifier.lead_created(&customer()).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].0, "priya@example.com");
        assert_eq!(sent[1].0, "admin@lifeinsurance.com");
    }

    #[tokio::test]
    async fn test_mailer_failure_is_swallowed() {
        let notifier = EmailLeadNotifier::new(
            Arc::new(RecordingMailer::new(true)),
            "admin@lifeinsurance.com",
        );
        assert!(notifier.lead_created(&customer()).await.is_ok());
    }
}
