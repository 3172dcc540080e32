//! # Authenticated Admin Principal
//!
//! [`AdminUser`] represents the *result of authentication*, not a domain
//! user: it carries the token subject and nothing else. Authorization
//! decisions (which, for this service, amount to "admins may do everything
//! under `/api/admin`") stay in the routing layer.
//!
//! The type doubles as an axum extractor: any handler that takes an
//! `AdminUser` argument rejects requests lacking a valid
//! `Authorization: Bearer <token>` header with `401 Unauthorized` before the
//! handler body runs.

use axum::{extract::FromRequestParts, http::request::Parts, http::StatusCode};

use crate::auth::jwt::decode_token;
use crate::config::auth::AuthConfig;

/// An authenticated admin extracted from a bearer session token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminUser {
    /// The token `sub` (subject) claim.
    pub subject: String,
}

impl AdminUser {
    /// Creates a principal from a token subject. Performs no validation;
    /// used by the extractor and by tests.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let cfg = parts
            .extensions
            .get::<AuthConfig>()
            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "auth config missing"))?;

        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or((StatusCode::UNAUTHORIZED, "missing bearer token"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or((StatusCode::UNAUTHORIZED, "missing bearer token"))?;

        let claims = decode_token(token, &cfg.token_secret)
            .map_err(|_| (StatusCode::UNAUTHORIZED, "invalid or expired token"))?;

        Ok(AdminUser::new(claims.sub))
    }
}
