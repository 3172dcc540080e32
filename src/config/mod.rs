//! Configuration loading: one module per concern, aggregated by
//! [`app::AppConfig`].

pub mod app;
pub mod auth;
pub mod env;
pub mod image;
pub mod locale;
pub mod store;
pub mod web;
