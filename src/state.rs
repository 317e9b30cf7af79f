use std::sync::Arc;

use storefront_config::{CorsConfig, JwtConfig};
use storefront_db::ProductRepository;

#[derive(Clone, Debug)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            products,
            jwt_config,
            cors_config,
        }
    }

    /// Builds state around `products` with configuration read from the
    /// environment.
    pub fn from_env(products: Arc<dyn ProductRepository>) -> Self {
        Self::new(products, JwtConfig::from_env(), CorsConfig::from_env())
    }
}
