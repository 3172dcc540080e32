//! # Admin Dashboard Stats
//!
//! `GET /api/admin/stats` returns lead and photo totals plus the five most
//! recent registrations for the dashboard header.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::auth::AdminUser;
use crate::model::AdminStats;
use crate::store::{LeadRepo, PhotoRepo};

const RECENT_LEADS: usize = 5;

/// GET `/api/admin/stats`.
pub async fn stats_handler(
    _admin: AdminUser,
    Extension(leads): Extension<LeadRepo>,
    Extension(photos): Extension<PhotoRepo>,
) -> Response {
    let stats = leads.list().and_then(|all| {
        let total_photos = photos.count()?;
        Ok(AdminStats {
            total_leads: all.len(),
            recent_leads: all.into_iter().take(RECENT_LEADS).collect(),
            total_photos,
        })
    });
    match stats {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "stats aggregation failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
