//! # Admin Login
//!
//! `POST /api/admin/login` exchanges the shared admin password for a signed
//! bearer token. Password comparison is constant-time against the digest
//! held in [`AuthConfig`]; when no password is configured the endpoint
//! reports the admin surface as closed instead of accepting anything.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::create_token;
use crate::auth::password::verify;
use crate::config::auth::AuthConfig;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds, for client-side expiry handling.
    pub expires_in: u64,
}

/// POST `/api/admin/login`.
pub async fn login_handler(
    Extension(auth): Extension<AuthConfig>,
    Json(req): Json<LoginRequest>,
) -> Response {
    if !auth.is_login_enabled() {
        return (StatusCode::SERVICE_UNAVAILABLE, "admin login disabled").into_response();
    }
    if !verify(&req.password, &auth.password_digest) {
        tracing::warn!("failed admin login attempt");
        return (StatusCode::UNAUTHORIZED, "invalid credentials").into_response();
    }

    match create_token("admin", &auth.token_secret, auth.token_ttl_hours) {
        Ok(token) => {
            tracing::info!("admin logged in");
            Json(LoginResponse {
                token,
                expires_in: u64::from(auth.token_ttl_hours) * 3600,
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "token creation failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
