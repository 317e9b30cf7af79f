//! PostgreSQL connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: full connection string; takes precedence when set
//! - `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_PORT`, `DB_NAME`: used to
//!   assemble the connection string when `DATABASE_URL` is unset
//!   (defaults: `postgres`, `postgres`, `localhost`, `5432`, `ecommerce`)
//! - `DB_MAX_CONNECTIONS`: pool size (default: 5)
//! - `DB_ACQUIRE_TIMEOUT_SECS`: how long a request waits for a pooled
//!   connection before failing (default: 5)

use std::env;
use std::time::Duration;

use crate::env_or;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
            let password = env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string());
            let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port: u16 = env_or("DB_PORT", 5432);
            let name = env::var("DB_NAME").unwrap_or_else(|_| "ecommerce".to_string());
            Self::url_from_parts(&user, &password, &host, port, &name)
        });

        Self {
            url,
            max_connections: env_or("DB_MAX_CONNECTIONS", 5),
            acquire_timeout: Duration::from_secs(env_or("DB_ACQUIRE_TIMEOUT_SECS", 5)),
        }
    }

    pub fn url_from_parts(user: &str, password: &str, host: &str, port: u16, name: &str) -> String {
        format!("postgres://{user}:{password}@{host}:{port}/{name}")
    }
}
