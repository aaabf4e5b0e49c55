//! Customer repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AppointmentDetails, Customer, LeadStatus, NewCustomer};
use crate::error::DomainError;

/// Persistence contract for `Customer` records. Two interchangeable
/// adapters exist: PostgreSQL when connection configuration is present,
/// process-local memory otherwise. The choice is made once at startup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a new lead with `Registered` status, a fresh id, and
    /// current timestamps.
    async fn create(&self, fields: &NewCustomer) -> Result<Customer, DomainError>;

    /// All customers, most recent submission first.
    async fn list_all(&self) -> Result<Vec<Customer>, DomainError>;

    /// Set the status of an existing customer, failing with
    /// `CustomerNotFound` otherwise. Stores `appointment` when given; when
    /// absent and the new status is not `AppointmentScheduled`, any stored
    /// details are cleared. Touches `updated_at`.
    async fn update_status(
        &self,
        id: &Uuid,
        status: LeadStatus,
        appointment: Option<AppointmentDetails>,
    ) -> Result<Customer, DomainError>;
}
