//! # Landing Page
//!
//! Server-rendered marketing page: hero banner, event copy, the photo
//! carousel (active photos only), the registration form, and any configured
//! tracking snippets. Unknown paths fall back to the same page, mirroring a
//! single-page deployment where every route shows the landing content.

use axum::{response::Response, Extension};
use askama::Template;

use crate::model::{Photo, SiteSettings};
use crate::store::{PhotoRepo, SettingsRepo};
use crate::web::template::render_template;

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate {
    settings: SiteSettings,
    photos: Vec<Photo>,
}

/// GET `/` and the router fallback.
///
/// Data loading failures degrade to defaults and an empty carousel rather
/// than a 500: the landing page is the public face and must stay up even
/// when the store is unhappy.
pub async fn landing_handler(
    Extension(settings_repo): Extension<SettingsRepo>,
    Extension(photo_repo): Extension<PhotoRepo>,
) -> Response {
    let settings = settings_repo.load().unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to load settings, rendering defaults");
        SiteSettings::default()
    });
    let photos = photo_repo.list_active().unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to load photos, rendering empty carousel");
        Vec::new()
    });

    render_template(LandingTemplate { settings, photos })
}
