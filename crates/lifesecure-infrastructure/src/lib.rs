//! # LifeSecure Infrastructure
//!
//! Storage and notification adapters: PostgreSQL repositories, the
//! in-memory fallback store, and the email notification sink.

pub mod database;
pub mod email;

pub use database::{
    create_pool, InMemoryAdminRepository, InMemoryCustomerRepository, PgAdminRepository,
    PgCustomerRepository,
};
pub use email::{EmailLeadNotifier, LogMailer, Mailer, SmtpMailer};
