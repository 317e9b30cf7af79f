use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use tracing::instrument;

use storefront_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::modules::products::model::{
    CreateProductDto, ErrorResponse, MessageResponse, PaginationParams, Product, ProductId,
    UpdateProductDto,
};
use crate::modules::products::service::ProductService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Field validation failed", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Products",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(identity = %auth_user.identity()))]
pub async fn create_product(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateProductDto>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let product = ProductService::create_product(state.products.as_ref(), dto).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(state))]
pub async fn get_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductService::get_products(state.products.as_ref()).await?;

    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 400, description = "Invalid product id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    id: ProductId,
) -> Result<Json<Product>, AppError> {
    let product = ProductService::get_product(state.products.as_ref(), id).await?;

    Ok(Json(product))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, description = "Invalid product id or malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 422, description = "Field validation failed", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Products",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(identity = %auth_user.identity()))]
pub async fn update_product(
    State(state): State<AppState>,
    auth_user: AuthUser,
    id: ProductId,
    ValidatedJson(dto): ValidatedJson<UpdateProductDto>,
) -> Result<Json<Product>, AppError> {
    let product = ProductService::update_product(state.products.as_ref(), id, dto).await?;

    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = MessageResponse),
        (status = 400, description = "Invalid product id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Products",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(identity = %auth_user.identity()))]
pub async fn delete_product(
    State(state): State<AppState>,
    auth_user: AuthUser,
    id: ProductId,
) -> Result<Json<MessageResponse>, AppError> {
    ProductService::delete_product(state.products.as_ref(), id).await?;

    Ok(Json(MessageResponse::new("Product deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/products-paginated",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of the sorted listing", body = Vec<Product>),
        (status = 400, description = "Unknown sortBy or sortOrder, or a malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(state))]
pub async fn get_products_paginated(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<Vec<Product>>, AppError> {
    let Query(params) = params.map_err(|e| {
        AppError::bad_request(anyhow::anyhow!("Invalid query parameters: {}", e.body_text()))
    })?;

    let products =
        ProductService::get_products_paginated(state.products.as_ref(), params).await?;

    Ok(Json(products))
}
