//! Admin session management.
//!
//! Sessions are opaque tokens held in an explicit, owned store rather than
//! an ambient global flag, so independent instances can run side by side in
//! tests. No expiry: a token is valid until logout.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<Uuid, AdminSession>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, username: &str) -> AdminSession {
        let session = AdminSession {
            token: Uuid::new_v4(),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        self.sessions
            .write()
            .expect("session lock poisoned")
            .insert(session.token, session.clone());
        session
    }

    pub fn validate(&self, token: &Uuid) -> Option<AdminSession> {
        self.sessions
            .read()
            .expect("session lock poisoned")
            .get(token)
            .cloned()
    }

    /// True if the token existed and was revoked.
    pub fn revoke(&self, token: &Uuid) -> bool {
        self.sessions
            .write()
            .expect("session lock poisoned")
            .remove(token)
            .is_some()
    }
}
