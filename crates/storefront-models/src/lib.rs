//! # Storefront Models
//!
//! Domain models and DTOs for the Storefront API.
//!
//! - [`products`]: The persisted [`Product`] row and its request payloads
//! - [`responses`]: Shared JSON response bodies
//!
//! # Example
//!
//! ```ignore
//! use storefront_models::{CreateProductDto, Product};
//! use validator::Validate;
//!
//! let dto: CreateProductDto = serde_json::from_value(body)?;
//! dto.validate()?;
//! ```

pub mod products;
pub mod responses;

// Re-export commonly used types at crate root
pub use products::{CreateProductDto, Product, UpdateProductDto};
pub use responses::{ErrorResponse, MessageResponse};
