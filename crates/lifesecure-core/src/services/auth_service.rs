//! Admin authentication service

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::DomainError;
use crate::repositories::AdminRepository;

/// Checks admin credentials against whichever credential store was selected
/// at startup (fixed demo pair or the remote `admins` table).
pub struct AuthService {
    admins: Arc<dyn AdminRepository>,
}

impl AuthService {
    pub fn new(admins: Arc<dyn AdminRepository>) -> Self {
        Self { admins }
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> Result<bool, DomainError> {
        let ok = self.admins.verify_credentials(username, password).await?;
        if ok {
            info!(username, "admin login succeeded");
        } else {
            warn!(username, "admin login rejected");
        }
        Ok(ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::admin_repository::MockAdminRepository;

    #[tokio::test]
    async fn test_authenticate_delegates_to_store() {
        let mut repo = MockAdminRepository::new();
        repo.expect_verify_credentials()
            .returning(|username, password| Ok(username == "admin" && password == "admin123"));
        let service = AuthService::new(Arc::new(repo));

        assert!(service.authenticate("admin", "admin123").await.unwrap());
        assert!(!service.authenticate("admin", "wrong").await.unwrap());
    }
}
