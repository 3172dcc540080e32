//! # Route Table
//!
//! Assembles the public landing page and the admin API into one [`Router`].
//! Dependencies travel as [`Extension`] layers; handlers pull out exactly
//! what they need, and the [`AdminUser`](crate::auth::AdminUser) extractor
//! reads [`AuthConfig`] from the same extensions.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Extension, Router,
};
use tower_http::trace::TraceLayer;

use crate::config::app::AppConfig;
use crate::image::{ImageRsProcessor, InlineImageService};
use crate::store::{DocumentStore, LeadRepo, PhotoRepo, SettingsRepo};
use crate::time::Clock;
use crate::web::{landing, leads, photos, session, settings, stats};

/// Everything the route table needs, wired by the composition root.
pub struct AppDeps {
    pub config: AppConfig,
    pub store: Arc<dyn DocumentStore>,
    pub clock: Arc<dyn Clock>,
}

/// Builds the application router from its dependencies.
pub fn build_router(deps: AppDeps) -> Router {
    let AppDeps {
        config,
        store,
        clock,
    } = deps;

    let lead_repo = LeadRepo::new(store.clone(), clock);
    let photo_repo = PhotoRepo::new(store.clone(), config.seed_photos);
    let settings_repo = SettingsRepo::new(store);
    let images = InlineImageService::new(
        Arc::new(ImageRsProcessor::new(config.image.jpeg_quality)),
        config.image.clone(),
    );

    Router::new()
        .route("/", get(landing::landing_handler))
        .route("/api/leads", post(leads::register_handler))
        .route("/api/admin/login", post(session::login_handler))
        .route("/api/admin/leads", get(leads::admin_list_handler))
        .route("/api/admin/leads/export", get(leads::export_handler))
        .route("/api/admin/photos", post(photos::create_handler))
        .route("/api/admin/photos/{id}", delete(photos::delete_handler))
        .route("/api/admin/photos/{id}/toggle", post(photos::toggle_handler))
        .route(
            "/api/admin/settings",
            get(settings::get_handler).put(settings::put_handler),
        )
        .route("/api/admin/settings/banner", post(settings::banner_upload_handler))
        .route("/api/admin/settings/logo", post(settings::logo_upload_handler))
        .route("/api/admin/stats", get(stats::stats_handler))
        .fallback(landing::landing_handler)
        .layer(DefaultBodyLimit::max(config.http.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(lead_repo))
        .layer(Extension(photo_repo))
        .layer(Extension(settings_repo))
        .layer(Extension(images))
        .layer(Extension(config.auth))
        .layer(Extension(config.locale))
}
