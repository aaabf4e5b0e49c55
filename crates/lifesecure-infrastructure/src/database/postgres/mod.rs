//! PostgreSQL repository implementations

pub mod admin_repo_impl;
pub mod customer_repo_impl;

pub use admin_repo_impl::PgAdminRepository;
pub use customer_repo_impl::PgCustomerRepository;
