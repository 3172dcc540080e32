//! # Admin Session Tokens (JWT)
//!
//! Pure JWT creation and decoding for admin sessions. This module does not
//! read the environment; the signing secret and lifetime come from the
//! caller (typically [`crate::config::auth::AuthConfig`]).
//!
//! ## Provided functions
//! - [`create_token`] — create a signed session token
//! - [`decode_token`] — validate and decode a session token

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims stored inside the session token payload.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject — the authenticated principal (`"admin"` for this service).
    pub sub: String,
    /// Expiration timestamp (UTC, seconds since UNIX epoch).
    pub exp: usize,
}

/// Creates a signed session token for the given subject.
///
/// # Errors
/// Returns an error if JWT encoding fails.
///
/// # Example
/// ```
/// use festa_web::auth::jwt::create_token;
///
/// let token = create_token("admin", "test-secret", 12).unwrap();
/// assert!(!token.is_empty());
/// ```
pub fn create_token(subject: &str, secret: &str, ttl_hours: u32) -> anyhow::Result<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(i64::from(ttl_hours)))
        .expect("invalid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: subject.to_string(),
        exp: expiration,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Decodes and validates a session token.
///
/// # Errors
/// Returns an error if the token is malformed, the signature does not
/// match, or the token is expired.
///
/// # Example
/// ```
/// use festa_web::auth::jwt::{create_token, decode_token};
///
/// let token = create_token("admin", "test-secret", 1).unwrap();
/// let claims = decode_token(&token, "test-secret").unwrap();
/// assert_eq!(claims.sub, "admin");
/// ```
pub fn decode_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(decoded.claims)
}
