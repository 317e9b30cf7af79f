use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::middleware::auth::require_auth;
use crate::state::AppState;

use super::controller::{
    create_product, delete_product, get_product, get_products, get_products_paginated,
    update_product,
};

/// Product routes. Reads are public; writes sit behind [`require_auth`].
pub fn init_products_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/products", get(get_products))
        .route("/products/{id}", get(get_product))
        .route("/products-paginated", get(get_products_paginated));

    let protected = Router::new()
        .route("/products", post(create_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    public.merge(protected)
}
