//! Database adapters: PostgreSQL and the in-memory fallback.

pub mod connection;
pub mod memory;
pub mod postgres;

pub use connection::create_pool;
pub use memory::{InMemoryAdminRepository, InMemoryCustomerRepository};
pub use postgres::{PgAdminRepository, PgCustomerRepository};
