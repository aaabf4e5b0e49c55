//! Request and response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lifesecure_core::domain::{AppointmentDetails, Customer, LeadStatus};

#[derive(Debug, Serialize)]
pub struct AppointmentDto {
    pub date: NaiveDate,
    pub time: String,
    pub place: String,
}

impl From<AppointmentDetails> for AppointmentDto {
    fn from(details: AppointmentDetails) -> Self {
        Self {
            date: details.date,
            time: details.time,
            place: details.place,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CustomerDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub dob: NaiveDate,
    pub status: LeadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment: Option<AppointmentDto>,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            mobile: customer.mobile,
            dob: customer.dob,
            status: customer.status,
            appointment: customer.appointment.map(Into::into),
            submitted_at: customer.submitted_at,
            updated_at: customer.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangeStatusRequest {
    /// One of the five status strings; parsed in the handler so a bad value
    /// gets the standard validation envelope instead of a body rejection.
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct CustomerListQuery {
    /// "All" or one of the five status strings.
    pub status: Option<String>,
    /// Search term over name, email, or mobile.
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: usize,
    pub active: usize,
    pub counts: Vec<StatusCount>,
}

#[derive(Debug, Serialize)]
pub struct StatusCount {
    pub status: LeadStatus,
    pub count: usize,
}
