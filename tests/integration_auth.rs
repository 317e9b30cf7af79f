mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use common::{
    expired_token, foreign_token, product_json, send_json, setup_test_app, valid_token,
};

#[tokio::test]
async fn test_create_without_token_is_unauthorized() {
    let app = setup_test_app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/products",
        None,
        Some(product_json("Lamp", 10.0, 1)),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Unauthorized" }));
    assert!(app.repo.is_empty());
    assert_eq!(app.repo.call_count(), 0);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_invalid() {
    let app = setup_test_app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/products",
        Some(&foreign_token()),
        Some(product_json("Lamp", 10.0, 1)),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Invalid token" }));
    assert_eq!(app.repo.call_count(), 0);
}

#[tokio::test]
async fn test_expired_token_is_invalid() {
    let app = setup_test_app();

    let (status, body) = send_json(&app, "DELETE", "/products/1", Some(&expired_token()), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn test_garbage_token_is_invalid() {
    let app = setup_test_app();

    let (status, body) = send_json(
        &app,
        "PUT",
        "/products/1",
        Some("not.a.jwt"),
        Some(product_json("Lamp", 10.0, 1)),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn test_auth_is_checked_before_body_and_id() {
    let app = setup_test_app();

    let (status, _) = send_json(&app, "PUT", "/products/abc", None, Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_raw_token_without_bearer_scheme_is_accepted() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("authorization", valid_token())
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&product_json("Lamp", 10.0, 1)).unwrap(),
        ))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["name"], "Lamp");
}

#[tokio::test]
async fn test_reads_need_no_token() {
    let app = setup_test_app();

    let (status, _) = send_json(&app, "GET", "/products", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(&app, "GET", "/products-paginated", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(&app, "GET", "/products/1", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_valid_token_allows_writes() {
    let app = setup_test_app();
    let token = valid_token();

    let (status, created) = send_json(
        &app,
        "POST",
        "/products",
        Some(&token),
        Some(product_json("Lamp", 10.0, 1)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/products/{}", created["id"]);
    let (status, _) = send_json(&app, "DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}
