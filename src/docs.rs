use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::health::controller::HealthResponse;
use crate::modules::products::model::{
    CreateProductDto, ErrorResponse, MessageResponse, PaginationParams, Product,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::root,
        crate::modules::health::controller::health,
        crate::modules::products::controller::create_product,
        crate::modules::products::controller::get_products,
        crate::modules::products::controller::get_product,
        crate::modules::products::controller::update_product,
        crate::modules::products::controller::delete_product,
        crate::modules::products::controller::get_products_paginated,
    ),
    components(
        schemas(
            Product,
            CreateProductDto,
            MessageResponse,
            ErrorResponse,
            PaginationParams,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Health", description = "Liveness and readiness")
    ),
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "A product catalog REST API built with Rust, Axum, and PostgreSQL. Writes require a JWT bearer token.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
