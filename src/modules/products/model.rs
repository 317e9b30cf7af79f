use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use storefront_core::AppError;

pub use storefront_core::PaginationParams;
pub use storefront_models::{
    CreateProductDto, ErrorResponse, MessageResponse, Product, UpdateProductDto,
};

/// Product id taken from the `{id}` path segment.
///
/// Anything that is not a positive decimal integer is rejected with 400
/// before the repository is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i32);

impl ProductId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        raw.trim()
            .parse::<i32>()
            .ok()
            .filter(|id| *id > 0)
            .map(ProductId)
            .ok_or_else(|| AppError::bad_request(anyhow!("Invalid product id")))
    }
}

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request(anyhow!("Invalid product id")))?;

        Self::parse(&raw)
    }
}
