//! PostgreSQL admin credential repository

use argon2::password_hash::PasswordHash;
use argon2::{Argon2, PasswordVerifier};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use lifesecure_core::domain::Admin;
use lifesecure_core::error::DomainError;
use lifesecure_core::repositories::AdminRepository;

pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdminRow {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<AdminRow> for Admin {
    fn from(row: AdminRow) -> Self {
        Admin {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, DomainError> {
        let row: Option<AdminRow> = sqlx::query_as(
            r#"
            SELECT id, username, password_hash, created_at
            FROM admins
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error looking up admin: {}", e);
            DomainError::BackendUnavailable(e.to_string())
        })?;

        let Some(admin) = row.map(Admin::from) else {
            return Ok(false);
        };

        let parsed = match PasswordHash::new(&admin.password_hash) {
            Ok(h) => h,
            Err(e) => {
                error!(username = %admin.username, "stored password hash unreadable: {}", e);
                return Ok(false);
            }
        };

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
