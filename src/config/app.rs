//! # Application Configuration Loader
//!
//! Provides a unified configuration loader aggregating the HTTP, document
//! store, authentication, image-processing, and locale settings.
//!
//! Automatically loads `.env` files for non-production environments. It
//! checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! The loaded record is built once at startup and passed explicitly into the
//! router and handlers — there is no global settings singleton.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `SEED_PHOTOS` | Seed sample gallery photos on first read | `true` |
//!
//! Sub-config variables are documented in their own modules:
//! [`HttpConfig`], [`StoreConfig`], [`AuthConfig`], [`ImageConfig`],
//! [`LocaleConfig`].
//!
//! # Example
//! ```rust,no_run
//! use festa_web::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env();
//! println!("listening on {}", cfg.http.bind_addr);
//! ```

use std::env;

use crate::config::{
    auth::AuthConfig, env::read_flag, image::ImageConfig, locale::LocaleConfig, store::StoreConfig,
    web::HttpConfig,
};

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP server configuration.
    pub http: HttpConfig,
    /// Document store location.
    pub store: StoreConfig,
    /// Admin credential boundary settings.
    pub auth: AuthConfig,
    /// Upload resize bounds and encoder quality.
    pub image: ImageConfig,
    /// Display timezone settings.
    pub locale: LocaleConfig,
    /// Whether the photo collection is seeded with samples on first read.
    pub seed_photos: bool,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to
    ///   defaults.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        AppConfig {
            http: HttpConfig::from_env(),
            store: StoreConfig::from_env(),
            auth: AuthConfig::from_env(),
            image: ImageConfig::from_env(),
            locale: LocaleConfig::from_env(),
            seed_photos: read_flag("SEED_PHOTOS", true),
        }
    }
}

#[cfg(test)]
impl AppConfig {
    /// A fixed configuration for router-level tests: login enabled with
    /// password `"pw"`, deterministic token secret, all other values at
    /// their defaults.
    pub fn for_tests() -> Self {
        Self {
            http: HttpConfig {
                bind_addr: "127.0.0.1:0".into(),
                max_body_bytes: 10 * 1024 * 1024,
            },
            store: StoreConfig {
                root: std::env::temp_dir().join("festa-web-test-data"),
            },
            auth: AuthConfig::from_env_with(|k| match k {
                "ADMIN_PASSWORD" => Some("pw".into()),
                "ADMIN_TOKEN_SECRET" => Some("router-test-secret".into()),
                _ => None,
            }),
            image: ImageConfig::default(),
            locale: LocaleConfig {
                timezone: "America/Sao_Paulo".into(),
            },
            seed_photos: true,
        }
    }
}
