//! Demo admin credentials (fallback)

use async_trait::async_trait;

use lifesecure_core::error::DomainError;
use lifesecure_core::repositories::AdminRepository;
use lifesecure_shared::constants::{DEMO_ADMIN_PASSWORD, DEMO_ADMIN_USERNAME};

/// Fixed demo credential pair, used when no remote credential store is
/// configured. Plain comparison; security hardening of the fallback path is
/// out of scope.
#[derive(Default)]
pub struct InMemoryAdminRepository;

impl InMemoryAdminRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, DomainError> {
        Ok(username == DEMO_ADMIN_USERNAME && password == DEMO_ADMIN_PASSWORD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_credentials_accepted() {
        let repo = InMemoryAdminRepository::new();
        assert!(repo.verify_credentials("admin", "admin123").await.unwrap());
    }

    #[tokio::test]
    async fn test_other_pairs_rejected() {
        let repo = InMemoryAdminRepository::new();
        assert!(!repo.verify_credentials("admin", "admin124").await.unwrap());
        assert!(!repo.verify_credentials("root", "admin123").await.unwrap());
        assert!(!repo.verify_credentials("", "").await.unwrap());
    }
}
