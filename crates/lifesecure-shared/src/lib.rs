//! # LifeSecure Shared
//!
//! Shared configuration, telemetry, constants, and types for the
//! lead-capture service.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;
pub mod types;

pub use error::AppError;
pub use types::*;
