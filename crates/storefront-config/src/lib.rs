//! # Storefront Config
//!
//! Configuration types for the Storefront API, loaded from environment
//! variables at startup and passed into the application state.
//!
//! - [`jwt`]: Token secret and lifetime
//! - [`database`]: PostgreSQL connection settings
//! - [`server`]: Bind address
//! - [`cors`]: CORS allowed origins
//!
//! # Example
//!
//! ```ignore
//! use storefront_config::{DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let database_config = DatabaseConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Reads an environment variable and parses it, falling back to `default`
/// when it is unset or unparseable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
