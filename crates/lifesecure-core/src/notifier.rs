//! Lead notification port

use async_trait::async_trait;

use crate::domain::Customer;
use crate::error::DomainError;

/// Fire-and-forget notification sink invoked after a successful intake.
/// Implementations send a confirmation to the submitter and an alert to the
/// configured admin address. A failed notification must never fail the
/// originating operation; callers log and continue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadNotifier: Send + Sync {
    async fn lead_created(&self, customer: &Customer) -> Result<(), DomainError>;
}
