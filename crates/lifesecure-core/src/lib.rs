//! # LifeSecure Core
//!
//! Domain entities, services, and repository traits for the lead-capture
//! application.

pub mod domain;
pub mod error;
pub mod notifier;
pub mod repositories;
pub mod services;

pub use domain::*;
pub use error::{DomainError, FieldError, FieldErrors};
