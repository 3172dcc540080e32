//! # HTTP Server Configuration
//!
//! Bind address and request body limits for the axum server.
//!
//! The body limit exists because gallery and banner uploads arrive as
//! multipart bodies; it should comfortably exceed the largest expected
//! camera photo.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `BIND_ADDR` | Socket address to listen on | `0.0.0.0:3000` |
//! | `HTTP_MAX_BODY_BYTES` | Maximum request body size (bytes) | derived from `HTTP_MAX_BODY_MB` |
//! | `HTTP_MAX_BODY_MB` | Max body size in megabytes (if bytes not set) | `10` |

use std::env;

use crate::config::env::read_u32;

/// HTTP server configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    /// Address the server binds to, e.g. `0.0.0.0:3000`.
    pub bind_addr: String,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl HttpConfig {
    /// Builds an [`HttpConfig`] from environment variables.
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

        let max_body_bytes = env::var("HTTP_MAX_BODY_BYTES")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or_else(|| (read_u32("HTTP_MAX_BODY_MB", 10) as usize) * 1024 * 1024);

        Self {
            bind_addr,
            max_body_bytes,
        }
    }
}
