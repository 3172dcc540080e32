//! # festa_web
//!
//! Event landing page and admin service: a public marketing page with a
//! registration form and photo carousel, plus a password-gated admin API
//! for leads, gallery photos, and site settings, all backed by a hosted
//! document store.
//!
//! The centrepiece is the image pipeline in [`image`]: admin uploads are
//! downscaled to a bounded width and inlined into store documents as
//! `data:` URLs, so a single document fetch renders the page.
//!
//! ## Example usage (in another crate)
//!
//! ```rust
//! use festa_web::anyhow::Result;
//! use festa_web::config::app::AppConfig;
//! ```
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use askama;
pub use axum;
pub use base64;
pub use chrono;
pub use chrono_tz;
pub use dotenvy;
pub use rand;
pub use serde;
pub use serde_json;
pub use sha2;
pub use subtle;
pub use tokio;
pub use tower;
pub use tower_http;
pub use uuid;

// ===============================
// Public modules
// ===============================
pub mod auth;
pub mod config;
pub mod error;
pub mod export;
pub mod image;
pub mod model;
pub mod store;
pub mod time;
pub mod web;
