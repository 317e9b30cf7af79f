use anyhow::anyhow;
use tracing::instrument;

use storefront_core::{AppError, PageRequest};
use storefront_db::ProductRepository;

use crate::modules::products::model::{
    CreateProductDto, PaginationParams, Product, ProductId, UpdateProductDto,
};

fn product_not_found() -> AppError {
    AppError::not_found(anyhow!("Product not found"))
}

pub struct ProductService;

impl ProductService {
    #[instrument(skip(repo))]
    pub async fn create_product(
        repo: &dyn ProductRepository,
        dto: CreateProductDto,
    ) -> Result<Product, AppError> {
        let product = repo.insert(&dto).await.map_err(AppError::database)?;

        tracing::info!(product_id = product.id, "product created");
        Ok(product)
    }

    #[instrument(skip(repo))]
    pub async fn get_product(
        repo: &dyn ProductRepository,
        ProductId(id): ProductId,
    ) -> Result<Product, AppError> {
        repo.find_by_id(id)
            .await
            .map_err(AppError::database)?
            .ok_or_else(product_not_found)
    }

    #[instrument(skip(repo))]
    pub async fn get_products(repo: &dyn ProductRepository) -> Result<Vec<Product>, AppError> {
        repo.list().await.map_err(AppError::database)
    }

    /// Returns one page of the sorted listing.
    ///
    /// Sort parameters are validated before any query is issued; an unknown
    /// column or direction is a 400.
    #[instrument(skip(repo))]
    pub async fn get_products_paginated(
        repo: &dyn ProductRepository,
        params: PaginationParams,
    ) -> Result<Vec<Product>, AppError> {
        let page = PageRequest::try_from(params).map_err(AppError::bad_request)?;

        repo.list_page(&page).await.map_err(AppError::database)
    }

    #[instrument(skip(repo))]
    pub async fn update_product(
        repo: &dyn ProductRepository,
        ProductId(id): ProductId,
        dto: UpdateProductDto,
    ) -> Result<Product, AppError> {
        let product = repo
            .update(id, &dto)
            .await
            .map_err(AppError::database)?
            .ok_or_else(product_not_found)?;

        tracing::info!(product_id = product.id, "product updated");
        Ok(product)
    }

    #[instrument(skip(repo))]
    pub async fn delete_product(
        repo: &dyn ProductRepository,
        ProductId(id): ProductId,
    ) -> Result<(), AppError> {
        repo.delete(id)
            .await
            .map_err(AppError::database)?
            .ok_or_else(product_not_found)?;

        tracing::info!(product_id = id, "product deleted");
        Ok(())
    }
}
