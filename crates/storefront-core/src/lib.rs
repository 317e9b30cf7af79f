//! # Storefront Core
//!
//! Core types, errors, and utilities for the Storefront API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Page/limit parsing and the allow-listed sort keys
//!
//! # Example
//!
//! ```ignore
//! use storefront_core::errors::AppError;
//! use storefront_core::pagination::{PageRequest, PaginationParams};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Product not found"));
//!
//! let page = PageRequest::try_from(PaginationParams::default())?;
//! assert_eq!(page.offset(), 0);
//! ```

pub mod errors;
pub mod pagination;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use pagination::{PageRequest, PaginationParams, SortColumn, SortOrder};
