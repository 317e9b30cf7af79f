//! # Storefront DB
//!
//! Database pool and product persistence for the Storefront API.
//!
//! Handlers never talk to the pool directly: they go through the
//! [`ProductRepository`] trait, which has a PostgreSQL implementation
//! ([`PgProductRepository`]) and, behind the `test-utils` feature, an
//! in-memory one ([`MemoryProductRepository`]).
//!
//! # Schema
//!
//! The service does not run migrations. It expects:
//!
//! ```sql
//! CREATE TABLE products (
//!     id SERIAL PRIMARY KEY,
//!     name VARCHAR(255) NOT NULL,
//!     description TEXT,
//!     price NUMERIC(10, 2) NOT NULL,
//!     stock_quantity INTEGER NOT NULL DEFAULT 0
//! );
//! ```
//!
//! # Example
//!
//! ```ignore
//! use storefront_config::DatabaseConfig;
//! use storefront_db::{PgProductRepository, init_db_pool};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! let products = PgProductRepository::new(pool);
//! ```

use sqlx::postgres::PgPoolOptions;

use storefront_config::DatabaseConfig;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod postgres;
pub mod query;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryProductRepository;
pub use postgres::PgProductRepository;
pub use repository::{ProductRepository, RepositoryError};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Initializes a PostgreSQL connection pool.
///
/// The pool is cheaply cloneable; build it once at startup and close it
/// on shutdown.
///
/// # Errors
///
/// Returns the connection error if the first connection cannot be
/// established within the configured acquire timeout.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await
}
