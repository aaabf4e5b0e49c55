//! Domain entities for the lead-capture application.

pub mod admin;
pub mod customer;

pub use admin::Admin;
pub use customer::{AppointmentDetails, Customer, LeadStatus, NewCustomer};
