use std::env;

use crate::env_or;

pub const DEFAULT_TOKEN_EXPIRY_SECS: i64 = 3600;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime of issued tokens, in seconds.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_expiry: DEFAULT_TOKEN_EXPIRY_SECS,
        }
    }

    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| "default_secret_key".to_string()),
            token_expiry: env_or("JWT_TOKEN_EXPIRY", DEFAULT_TOKEN_EXPIRY_SECS), // 1 hour
        }
    }
}
