use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use storefront_core::PageRequest;
use storefront_models::{CreateProductDto, Product, UpdateProductDto};

use crate::query;
use crate::repository::{ProductRepository, RepositoryError};

#[derive(Debug, Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self))]
    async fn insert(&self, dto: &CreateProductDto) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&query::insert_product())
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(dto.price)
            .bind(dto.stock_quantity)
            .fetch_one(&self.pool)
            .await?;

        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&query::select_product_by_id())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&query::select_products())
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn list_page(&self, page: &PageRequest) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&query::select_products_page(page))
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        id: i32,
        dto: &UpdateProductDto,
    ) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&query::update_product())
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(dto.price)
            .bind(dto.stock_quantity)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&query::delete_product())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
