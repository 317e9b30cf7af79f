//! JWT creation and verification.
//!
//! Tokens are HS256-signed [`Claims`]. Verification takes the clock as an
//! argument so expiry is decided against the caller's `now` rather than
//! ambient system time; a token is expired from its `exp` second onward.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use storefront_config::JwtConfig;

use crate::claims::{AuthClaim, Claims};
use crate::error::AuthError;

/// Issues a token for `identity` using the configured secret and lifetime.
pub fn issue_token(identity: &str, jwt_config: &JwtConfig) -> Result<String, AuthError> {
    issue_token_at(
        identity,
        &jwt_config.secret,
        Duration::seconds(jwt_config.token_expiry),
        Utc::now(),
    )
}

/// Issues a token for `identity` that expires `ttl` after `now`.
pub fn issue_token_at(
    identity: &str,
    secret: &str,
    ttl: Duration,
    now: DateTime<Utc>,
) -> Result<String, AuthError> {
    let iat = now.timestamp();
    let claims = Claims {
        user: identity.to_string(),
        exp: iat + ttl.num_seconds(),
        iat,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(AuthError::Signing)
}

/// Verifies `token` against `secret` at instant `now`.
///
/// # Errors
///
/// - [`AuthError::MissingCredential`] if `token` is `None` or blank
/// - [`AuthError::InvalidCredential`] if the signature does not validate,
///   the token is malformed, or `now` is at or past its expiry
pub fn verify_token(
    token: Option<&str>,
    secret: &str,
    now: DateTime<Utc>,
) -> Result<AuthClaim, AuthError> {
    let token = token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingCredential)?;

    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is checked below against `now`; `exp` must still be present.
    validation.validate_exp = false;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidCredential)?;

    if now.timestamp() >= claims.exp {
        return Err(AuthError::InvalidCredential);
    }

    let expires_at =
        DateTime::<Utc>::from_timestamp(claims.exp, 0).ok_or(AuthError::InvalidCredential)?;

    Ok(AuthClaim {
        identity: claims.user,
        expires_at,
    })
}

/// Extracts the token from an `Authorization` header value.
///
/// Accepts `Bearer <token>` (scheme matched case-insensitively) and a bare
/// `<token>`. Returns `None` when nothing remains after the scheme.
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    let value = header?.trim();
    let token = match value.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ if value.eq_ignore_ascii_case("bearer") => "",
        _ => value,
    };

    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-at-least-32-characters-long";

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: SECRET.to_string(),
            token_expiry: 3600,
        }
    }

    #[test]
    fn test_issue_token_success() {
        let token = issue_token("ecommerce", &get_test_jwt_config()).unwrap();
        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_verify_token_success() {
        let now = Utc::now();
        let token = issue_token_at("ecommerce", SECRET, Duration::hours(1), now).unwrap();

        let claim = verify_token(Some(&token), SECRET, now).unwrap();

        assert_eq!(claim.identity, "ecommerce");
        assert_eq!(claim.expires_at.timestamp(), now.timestamp() + 3600);
    }

    #[test]
    fn test_verify_token_missing() {
        for token in [None, Some(""), Some("   ")] {
            let result = verify_token(token, SECRET, Utc::now());
            assert!(matches!(result, Err(AuthError::MissingCredential)));
        }
    }

    #[test]
    fn test_verify_token_invalid() {
        let result = verify_token(Some("invalid.token.here"), SECRET, Utc::now());
        assert!(matches!(result, Err(AuthError::InvalidCredential)));
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let now = Utc::now();
        let token = issue_token_at("ecommerce", SECRET, Duration::hours(1), now).unwrap();

        let result = verify_token(Some(&token), "different-secret-key", now);
        assert!(matches!(result, Err(AuthError::InvalidCredential)));
    }

    #[test]
    fn test_verify_token_expired() {
        let issued = Utc::now() - Duration::hours(2);
        let token = issue_token_at("ecommerce", SECRET, Duration::hours(1), issued).unwrap();

        let result = verify_token(Some(&token), SECRET, Utc::now());
        assert!(matches!(result, Err(AuthError::InvalidCredential)));
    }

    #[test]
    fn test_verify_token_uses_supplied_clock() {
        let issued = Utc::now();
        let token = issue_token_at("ecommerce", SECRET, Duration::seconds(60), issued).unwrap();

        assert!(verify_token(Some(&token), SECRET, issued + Duration::seconds(59)).is_ok());
        assert!(verify_token(Some(&token), SECRET, issued + Duration::seconds(60)).is_err());
        assert!(verify_token(Some(&token), SECRET, issued + Duration::days(1)).is_err());
    }

    #[test]
    fn test_verify_token_tampered_payload() {
        let now = Utc::now();
        let token = issue_token_at("ecommerce", SECRET, Duration::hours(1), now).unwrap();
        let other = issue_token_at("intruder", SECRET, Duration::hours(1), now).unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        let result = verify_token(Some(&forged), SECRET, now);
        assert!(matches!(result, Err(AuthError::InvalidCredential)));
    }

    #[test]
    fn test_verify_token_with_sub_claim() {
        let now = Utc::now();
        let payload = serde_json::json!({ "sub": "legacy", "exp": now.timestamp() + 600 });
        let token = encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let claim = verify_token(Some(&token), SECRET, now).unwrap();
        assert_eq!(claim.identity, "legacy");
    }

    #[test]
    fn test_verify_token_without_exp_rejected() {
        let payload = serde_json::json!({ "user": "ecommerce" });
        let token = encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let result = verify_token(Some(&token), SECRET, Utc::now());
        assert!(matches!(result, Err(AuthError::InvalidCredential)));
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(Some("bearer abc")), Some("abc"));
        assert_eq!(bearer_token(Some("abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(Some("Bearer ")), None);
        assert_eq!(bearer_token(Some("Bearer")), None);
        assert_eq!(bearer_token(Some("")), None);
        assert_eq!(bearer_token(None), None);
    }
}
