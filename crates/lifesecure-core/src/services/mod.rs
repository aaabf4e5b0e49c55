//! Application services

pub mod auth_service;
pub mod dashboard;
pub mod intake_service;
pub mod session;
pub mod workflow_service;

pub use auth_service::AuthService;
pub use intake_service::{IntakeService, LeadSubmission};
pub use session::{AdminSession, SessionManager};
pub use workflow_service::{AppointmentRequest, WorkflowService};
