//! Status workflow service.
//!
//! Transitions between lead statuses are fully open: any status is reachable
//! from any other by direct admin selection. The one exception is
//! `Appointment Scheduled`, which only commits once valid appointment
//! details have been collected.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::info;

use crate::domain::{AppointmentDetails, Customer, LeadStatus};
use crate::error::{DomainError, FieldErrors};
use crate::repositories::CustomerRepository;

/// Raw appointment form input from the detail-collection step.
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentRequest {
    /// `YYYY-MM-DD`, today or later.
    pub date: String,
    pub time: String,
    pub place: String,
}

impl AppointmentRequest {
    /// Validate against `today`, collecting every violation.
    pub fn validate_on(&self, today: NaiveDate) -> Result<AppointmentDetails, DomainError> {
        let mut errors = FieldErrors::new();

        let date = if self.date.is_empty() {
            errors.push("date", "Date is required");
            None
        } else {
            match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
                Ok(date) if date < today => {
                    errors.push("date", "Please select a future date");
                    None
                }
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push("date", "Please enter a valid date");
                    None
                }
            }
        };

        if self.time.is_empty() {
            errors.push("time", "Time is required");
        }

        let place = self.place.trim();
        if place.is_empty() {
            errors.push("place", "Meeting place is required");
        }

        match date {
            Some(date) if errors.is_empty() => Ok(AppointmentDetails {
                date,
                time: self.time.clone(),
                place: place.to_string(),
            }),
            _ => Err(DomainError::Validation(errors)),
        }
    }
}

pub struct WorkflowService {
    customers: Arc<dyn CustomerRepository>,
}

impl WorkflowService {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }

    /// Immediate-commit transition to any status except
    /// `Appointment Scheduled`, which requires the detail-collection step.
    /// The store clears any stale appointment details on the way.
    pub async fn change_status(
        &self,
        id: uuid::Uuid,
        status: LeadStatus,
    ) -> Result<Customer, DomainError> {
        if status == LeadStatus::AppointmentScheduled {
            return Err(DomainError::validation(
                "status",
                "Scheduling an appointment requires date, time, and place",
            ));
        }

        let customer = self.customers.update_status(&id, status, None).await?;
        info!(customer_id = %id, status = %status, "lead status updated");
        Ok(customer)
    }

    /// Commit the `Appointment Scheduled` transition once the collected
    /// details validate. On any failure the prior status stands untouched.
    pub async fn schedule_appointment(
        &self,
        id: uuid::Uuid,
        request: &AppointmentRequest,
    ) -> Result<Customer, DomainError> {
        let details = request.validate_on(Utc::now().date_naive())?;

        let customer = self
            .customers
            .update_status(&id, LeadStatus::AppointmentScheduled, Some(details))
            .await?;
        info!(
            customer_id = %id,
            date = %customer.appointment.as_ref().map(|a| a.date.to_string()).unwrap_or_default(),
            "appointment scheduled"
        );
        Ok(customer)
    }
}
