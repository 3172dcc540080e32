//! # Site Settings Endpoints
//!
//! - `GET /api/admin/settings` — current settings (defaults until saved).
//! - `PUT /api/admin/settings` — merge-save a partial update.
//! - `POST /api/admin/settings/banner` — multipart hero banner upload.
//! - `POST /api/admin/settings/logo` — multipart logo upload.
//!
//! Banner and logo uploads are downscaled at their own width bounds and
//! merged into the settings document as data URLs.

use axum::{
    extract::Multipart,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::auth::AdminUser;
use crate::image::InlineImageService;
use crate::model::SettingsPatch;
use crate::store::SettingsRepo;
use crate::web::photos::image_error_response;

/// GET `/api/admin/settings`.
pub async fn get_handler(_admin: AdminUser, Extension(repo): Extension<SettingsRepo>) -> Response {
    match repo.load() {
        Ok(settings) => Json(settings).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "settings load failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// PUT `/api/admin/settings`.
///
/// Accepts a partial document; absent fields keep their stored values.
/// Returns the merged settings.
pub async fn put_handler(
    _admin: AdminUser,
    Extension(repo): Extension<SettingsRepo>,
    Json(patch): Json<SettingsPatch>,
) -> Response {
    match repo.save(&patch) {
        Ok(settings) => Json(settings).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "settings save failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// POST `/api/admin/settings/banner`.
pub async fn banner_upload_handler(
    admin: AdminUser,
    Extension(repo): Extension<SettingsRepo>,
    Extension(images): Extension<InlineImageService>,
    multipart: Multipart,
) -> Response {
    upload_image_into_settings(admin, repo, images, multipart, SettingsField::Banner).await
}

/// POST `/api/admin/settings/logo`.
pub async fn logo_upload_handler(
    admin: AdminUser,
    Extension(repo): Extension<SettingsRepo>,
    Extension(images): Extension<InlineImageService>,
    multipart: Multipart,
) -> Response {
    upload_image_into_settings(admin, repo, images, multipart, SettingsField::Logo).await
}

enum SettingsField {
    Banner,
    Logo,
}

async fn upload_image_into_settings(
    _admin: AdminUser,
    repo: SettingsRepo,
    images: InlineImageService,
    mut multipart: Multipart,
    target: SettingsField,
) -> Response {
    let mut file: Option<(String, Vec<u8>)> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(|s| s.to_string());
        if name.as_deref() == Some("file") {
            let ct = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_default();
            match field.bytes().await {
                Ok(b) => file = Some((ct, b.to_vec())),
                Err(e) => {
                    return (StatusCode::BAD_REQUEST, format!("read body error: {e}"))
                        .into_response();
                }
            }
        }
    }

    let Some((content_type, bytes)) = file else {
        return (StatusCode::BAD_REQUEST, "no file").into_response();
    };

    let downscaled = match target {
        SettingsField::Banner => images.banner(&bytes, &content_type),
        SettingsField::Logo => images.logo(&bytes, &content_type),
    };
    let url = match downscaled {
        Ok(url) => url,
        Err(e) => return image_error_response(e),
    };

    let patch = match target {
        SettingsField::Banner => SettingsPatch::banner(url),
        SettingsField::Logo => SettingsPatch::logo(url),
    };
    match repo.save(&patch) {
        Ok(settings) => Json(settings).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "settings image save failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
