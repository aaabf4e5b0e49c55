//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_ADMIN_NOTIFY_ADDRESS, PLACEHOLDER_DATABASE_URL};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub email: EmailSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    /// True when a real remote backend is configured. An absent, empty, or
    /// placeholder URL selects the in-memory fallback store.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && self.url != PLACEHOLDER_DATABASE_URL
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailSettings {
    /// SMTP connection URL; empty means log-only delivery.
    pub smtp_url: String,
    pub from_address: String,
    pub admin_address: String,
}

impl EmailSettings {
    pub fn is_configured(&self) -> bool {
        !self.smtp_url.is_empty()
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "lifesecure-server")?
            .set_default("database.url", PLACEHOLDER_DATABASE_URL)?
            .set_default("database.max_connections", 5)?
            .set_default("email.smtp_url", "")?
            .set_default("email.from_address", "no-reply@lifeinsurance.com")?
            .set_default("email.admin_address", DEFAULT_ADMIN_NOTIFY_ADDRESS)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }
}
