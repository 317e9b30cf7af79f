//! # Storefront Auth
//!
//! Bearer-token issuance and verification for the Storefront API.
//!
//! - [`claims`]: The signed JWT payload and the verified [`AuthClaim`]
//! - [`jwt`]: Token creation and verification
//! - [`error`]: Verification failures
//!
//! Possession of a validly signed, unexpired token is the only access
//! criterion; there are no roles or permissions.
//!
//! # Example
//!
//! ```ignore
//! use storefront_auth::{issue_token, verify_token};
//! use storefront_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//!
//! let token = issue_token("ecommerce", &config)?;
//! let claim = verify_token(Some(&token), &config.secret, chrono::Utc::now())?;
//! assert_eq!(claim.identity, "ecommerce");
//! ```

pub mod claims;
pub mod error;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{AuthClaim, Claims};
pub use error::AuthError;
pub use jwt::{bearer_token, issue_token, issue_token_at, verify_token};
