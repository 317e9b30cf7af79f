use async_trait::async_trait;

use storefront_core::PageRequest;
use storefront_models::{CreateProductDto, Product, UpdateProductDto};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Persistence gateway for products.
///
/// Every method issues exactly one statement. Lookups that match no row
/// return `Ok(None)`; only store failures are errors.
#[async_trait]
pub trait ProductRepository: Send + Sync + std::fmt::Debug {
    async fn insert(&self, dto: &CreateProductDto) -> Result<Product, RepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;

    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    async fn list_page(&self, page: &PageRequest) -> Result<Vec<Product>, RepositoryError>;

    async fn update(
        &self,
        id: i32,
        dto: &UpdateProductDto,
    ) -> Result<Option<Product>, RepositoryError>;

    /// Deletes the row and returns it as it was before deletion.
    async fn delete(&self, id: i32) -> Result<Option<Product>, RepositoryError>;

    /// Round-trips to the store, for health checks.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
