//! Request middleware.
//!
//! - [`auth`]: The bearer-token gate for mutating routes and the
//!   [`AuthUser`](auth::AuthUser) extractor
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`require_auth`](auth::require_auth) verifies the token against the
//!    configured secret
//! 3. On success the verified `AuthUser` is stored in the request
//!    extensions and the handler runs; otherwise the request ends with 401

pub mod auth;
