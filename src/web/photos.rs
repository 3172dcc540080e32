//! # Photo Admin Endpoints
//!
//! - `POST /api/admin/photos` — multipart upload (title + image file); the
//!   image is downscaled at the gallery width and stored as a data URL.
//! - `DELETE /api/admin/photos/{id}`
//! - `POST /api/admin/photos/{id}/toggle` — flip landing-page visibility.
//!
//! A payload that fails to decode yields `422` and writes nothing; an
//! undeclared or unsupported content type yields `415`.

use axum::{
    extract::{Multipart, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::auth::AdminUser;
use crate::error::NotFoundError;
use crate::image::{ImageError, InlineImageService};
use crate::store::PhotoRepo;

/// POST `/api/admin/photos`.
pub async fn create_handler(
    _admin: AdminUser,
    Extension(repo): Extension<PhotoRepo>,
    Extension(images): Extension<InlineImageService>,
    mut multipart: Multipart,
) -> Response {
    let mut title = String::new();
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("title") => {
                title = field.text().await.unwrap_or_default();
            }
            Some("file") => {
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
            _ => {}
        }
    }

    let Some((content_type, bytes)) = file else {
        return (StatusCode::BAD_REQUEST, "no file").into_response();
    };

    let url = match images.gallery_photo(&bytes, &content_type) {
        Ok(url) => url,
        Err(e) => return image_error_response(e),
    };

    match repo.add(url, title) {
        Ok(photo) => {
            tracing::info!(photo_id = %photo.id, "photo added");
            (StatusCode::CREATED, Json(photo)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "photo store failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// DELETE `/api/admin/photos/{id}`.
pub async fn delete_handler(
    _admin: AdminUser,
    Extension(repo): Extension<PhotoRepo>,
    Path(id): Path<String>,
) -> Response {
    match repo.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) if e.downcast_ref::<NotFoundError>().is_some() => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "photo delete failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// POST `/api/admin/photos/{id}/toggle`.
pub async fn toggle_handler(
    _admin: AdminUser,
    Extension(repo): Extension<PhotoRepo>,
    Path(id): Path<String>,
) -> Response {
    match repo.toggle_active(&id) {
        Ok(photo) => Json(photo).into_response(),
        Err(e) if e.downcast_ref::<NotFoundError>().is_some() => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "photo toggle failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Maps downscaling failures onto HTTP statuses shared by every upload
/// endpoint.
pub(crate) fn image_error_response(err: ImageError) -> Response {
    match err {
        ImageError::Unsupported { content_type } => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("unsupported content-type: {content_type}"),
        )
            .into_response(),
        ImageError::Decode(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "unreadable image").into_response()
        }
        ImageError::Encode(e) => {
            tracing::error!(error = %e, "image encode failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
