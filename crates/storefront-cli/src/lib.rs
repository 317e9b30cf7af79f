//! # Storefront CLI
//!
//! Administrative utilities for the Storefront API: minting and checking
//! bearer tokens, and filling the catalog with fake products.
//!
//! ## Usage
//!
//! ```ignore
//! use storefront_cli::seeder::seed_products;
//!
//! let repo = PgProductRepository::new(pool);
//! let created = seed_products(&repo, 50).await?;
//! ```

pub mod seeder;
