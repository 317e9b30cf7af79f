//! Token payloads.
//!
//! - [`Claims`]: What is signed into the JWT
//! - [`AuthClaim`]: What a successful verification hands to the caller

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT payload.
///
/// The identity travels under `user`, matching tokens minted by existing
/// clients; `sub` is accepted on input as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity label of the token holder
    #[serde(alias = "sub")]
    pub user: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: i64,
    /// Token issued-at timestamp (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
}

/// A verified credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthClaim {
    pub identity: String,
    pub expires_at: DateTime<Utc>,
}
