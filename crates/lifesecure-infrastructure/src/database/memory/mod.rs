//! In-memory fallback repositories, used when no database is configured.

pub mod admin_repo_impl;
pub mod customer_repo_impl;

pub use admin_repo_impl::InMemoryAdminRepository;
pub use customer_repo_impl::InMemoryCustomerRepository;
