//! # Admin Authentication Configuration
//!
//! Holds the admin credential digest and the session-token signing secret.
//!
//! The admin password is never kept in memory as plaintext: it is reduced to
//! a SHA-256 digest at load time and compared in constant time at login
//! (see [`crate::auth::password`]). When no password is configured, a random
//! digest is generated so that no candidate can ever match, and
//! [`AuthConfig::is_login_enabled`] reports the admin surface as closed.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `ADMIN_PASSWORD` | Shared admin password | *none — admin login disabled* |
//! | `ADMIN_TOKEN_SECRET` | HMAC secret for session tokens | random per process |
//! | `ADMIN_TOKEN_TTL_HOURS` | Session token lifetime | `12` |

use std::env as std_env;

use rand::RngCore;

use crate::auth::password::derive_digest;

/// Configuration for the admin credential boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// SHA-256 digest of the admin password (random when unconfigured).
    pub password_digest: [u8; 32],
    /// Whether `ADMIN_PASSWORD` was actually provided.
    password_configured: bool,
    /// Secret used to sign admin session tokens.
    pub token_secret: String,
    /// Session token lifetime in hours.
    pub token_ttl_hours: u32,
}

impl AuthConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_env_with(|k| std_env::var(k).ok())
    }

    /// Loads configuration using a custom key provider (for testing).
    pub fn from_env_with<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (password_digest, password_configured) = match get("ADMIN_PASSWORD") {
            Some(p) if !p.is_empty() => (derive_digest(&p), true),
            _ => (unmatchable_digest(), false),
        };

        let token_secret = match get("ADMIN_TOKEN_SECRET") {
            Some(s) if !s.is_empty() => s,
            _ => random_token_secret(),
        };

        let token_ttl_hours = read_u32_via(&get, "ADMIN_TOKEN_TTL_HOURS", 12);

        Self {
            password_digest,
            password_configured,
            token_secret,
            token_ttl_hours,
        }
    }

    /// Returns `true` if an admin password was configured, i.e. login can
    /// possibly succeed.
    pub fn is_login_enabled(&self) -> bool {
        self.password_configured
    }
}

fn read_u32_via<F>(get: &F, name: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(s) => s.trim().parse::<u32>().unwrap_or(default),
        None => default,
    }
}

/// A digest derived from fresh random bytes. No password hashes to it.
fn unmatchable_digest() -> [u8; 32] {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    derive_digest(&format!("{bytes:?}"))
}

/// Generates a random per-process token secret (hex of 32 random bytes).
fn random_token_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
