//! # LifeSecure API
//!
//! HTTP handlers, DTOs, session guard, and router for the lead-capture
//! service.

pub mod dto;
pub mod handlers;
pub mod response;
pub mod router;
pub mod session;
pub mod state;

pub use router::build_router;
pub use state::AppState;
