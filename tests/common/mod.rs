#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use storefront::router::init_router;
use storefront::state::AppState;
use storefront_auth::issue_token_at;
use storefront_config::{CorsConfig, JwtConfig};
use storefront_db::MemoryProductRepository;

pub const TEST_SECRET: &str = "integration-test-secret-key";

pub struct TestApp {
    pub router: Router,
    pub repo: Arc<MemoryProductRepository>,
}

pub fn setup_test_app() -> TestApp {
    let repo = Arc::new(MemoryProductRepository::new());
    let state = AppState::new(
        repo.clone(),
        JwtConfig::new(TEST_SECRET),
        CorsConfig::default(),
    );

    TestApp {
        router: init_router(state),
        repo,
    }
}

pub fn valid_token() -> String {
    issue_token_at("ecommerce", TEST_SECRET, Duration::hours(1), Utc::now()).unwrap()
}

pub fn expired_token() -> String {
    let issued = Utc::now() - Duration::hours(2);
    issue_token_at("ecommerce", TEST_SECRET, Duration::hours(1), issued).unwrap()
}

pub fn foreign_token() -> String {
    issue_token_at("ecommerce", "some-other-secret", Duration::hours(1), Utc::now()).unwrap()
}

pub fn product_json(name: &str, price: f64, stock: i32) -> Value {
    serde_json::json!({
        "name": name,
        "description": format!("{} description", name),
        "price": price,
        "stock_quantity": stock
    })
}

/// Sends one request and returns the status and raw body bytes.
pub async fn send(
    app: &TestApp,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

/// Like [`send`], decoding the body as JSON.
pub async fn send_json(
    app: &TestApp,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, token, body).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn create_product(app: &TestApp, name: &str, price: f64, stock: i32) -> Value {
    let (status, body) = send_json(
        app,
        "POST",
        "/products",
        Some(&valid_token()),
        Some(product_json(name, price, stock)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}
