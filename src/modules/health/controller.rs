use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use storefront_models::ErrorResponse;

use crate::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the e-commerce API!";

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome text", body = String, content_type = "text/plain")
    ),
    tag = "Health"
)]
pub async fn root() -> &'static str {
    WELCOME_MESSAGE
}

/// Reports whether the product store answers.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = HealthResponse)
    ),
    tag = "Health"
)]
#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.products.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded".to_string(),
                }),
            )
        }
    }
}

fn error_body(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    error_body(StatusCode::NOT_FOUND, "Not Found")
}

/// Known path, no handler for the method.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    error_body(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
