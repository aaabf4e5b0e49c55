//! Repository traits (ports)

pub mod admin_repository;
pub mod customer_repository;

pub use admin_repository::AdminRepository;
pub use customer_repository::CustomerRepository;
