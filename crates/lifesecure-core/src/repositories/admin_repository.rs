//! Admin credential repository trait (port)

use async_trait::async_trait;

use crate::error::DomainError;

/// Credential check contract. The fallback adapter compares against the
/// fixed demo pair; the PostgreSQL adapter verifies an argon2 hash from the
/// `admins` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, DomainError>;
}
