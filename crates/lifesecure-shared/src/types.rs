//! Common types

use uuid::Uuid;

pub type EntityId = Uuid;

pub fn new_id() -> EntityId {
    Uuid::new_v4()
}

/// Mask an email address for log output. Counts characters, not bytes, so
/// multi-byte local parts never split mid-character.
pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let shown = if local.chars().count() <= 2 { 1 } else { 2 };
        let prefix: String = local.chars().take(shown).collect();
        format!("{}***{}", prefix, domain)
    } else {
        "***".to_string()
    }
}
