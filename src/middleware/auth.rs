use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use storefront_auth::{AuthClaim, AuthError, bearer_token, verify_token};
use storefront_config::JwtConfig;
use storefront_core::AppError;

use crate::state::AppState;

/// The verified caller of a gated route.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthClaim);

impl AuthUser {
    pub fn identity(&self) -> &str {
        &self.0.identity
    }
}

/// Maps a verification failure to its HTTP error.
pub fn auth_rejection(err: AuthError) -> AppError {
    match err {
        AuthError::MissingCredential | AuthError::InvalidCredential => AppError::unauthorized(err),
        AuthError::Signing(_) => AppError::internal(err),
    }
}

/// Verifies the `Authorization` header of a request.
pub fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<AuthUser, AppError> {
    let header = match headers.get(header::AUTHORIZATION) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| auth_rejection(AuthError::InvalidCredential))?,
        ),
        None => None,
    };

    verify_token(bearer_token(header), &jwt_config.secret, Utc::now())
        .map(AuthUser)
        .map_err(auth_rejection)
}

/// Route layer for mutating routes.
///
/// Rejects the request before the handler runs unless it carries a valid
/// token, and stores the [`AuthUser`] in the request extensions otherwise.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = authenticate(req.headers(), &state.jwt_config)?;

    tracing::debug!(identity = %auth_user.identity(), "request authenticated");
    req.extensions_mut().insert(auth_user);

    Ok(next.run(req).await)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        authenticate(&parts.headers, &state.jwt_config)
    }
}
