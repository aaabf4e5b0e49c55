//! Shared application state

use std::sync::Arc;

use lifesecure_core::repositories::CustomerRepository;
use lifesecure_core::services::{AuthService, IntakeService, SessionManager, WorkflowService};

#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn CustomerRepository>,
    pub intake: Arc<IntakeService>,
    pub workflow: Arc<WorkflowService>,
    pub auth: Arc<AuthService>,
    pub sessions: Arc<SessionManager>,
}
