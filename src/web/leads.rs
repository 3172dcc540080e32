//! # Lead Endpoints
//!
//! - `POST /api/leads` — public registration from the landing-page form.
//! - `GET /api/admin/leads` — admin list, optional `?search=` filter.
//! - `GET /api/admin/leads/export` — admin CSV download.
//!
//! The registration endpoint is deliberately terse in its error bodies; the
//! landing page translates status codes into user-facing copy. Duplicate
//! emails map to `409 Conflict` and never mutate the store.

use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;

use crate::auth::AdminUser;
use crate::config::locale::LocaleConfig;
use crate::export::csv::leads_csv;
use crate::model::NewLead;
use crate::store::{LeadError, LeadRepo};

/// POST `/api/leads`.
///
/// Returns `201` with the stored lead, `409` on a duplicate email, `422`
/// when name or email is blank.
pub async fn register_handler(
    Extension(repo): Extension<LeadRepo>,
    Json(new): Json<NewLead>,
) -> Response {
    match repo.add(new) {
        Ok(lead) => {
            tracing::info!(lead_id = %lead.id, "lead registered");
            (StatusCode::CREATED, Json(lead)).into_response()
        }
        Err(e) => match e.downcast_ref::<LeadError>() {
            Some(LeadError::DuplicateEmail { .. }) => {
                (StatusCode::CONFLICT, "email already registered").into_response()
            }
            Some(LeadError::MissingField { field }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("missing required field: {field}"),
            )
                .into_response(),
            None => {
                tracing::error!(error = %e, "lead registration failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
    }
}

#[derive(Debug, Deserialize)]
pub struct LeadListParams {
    pub search: Option<String>,
}

/// GET `/api/admin/leads`.
pub async fn admin_list_handler(
    _admin: AdminUser,
    Extension(repo): Extension<LeadRepo>,
    Query(params): Query<LeadListParams>,
) -> Response {
    let result = match params.search.as_deref() {
        Some(q) => repo.search(q),
        None => repo.list(),
    };
    match result {
        Ok(leads) => Json(leads).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "lead listing failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET `/api/admin/leads/export`.
///
/// Streams the full lead list as an attached CSV file, timestamps rendered
/// in the configured event timezone.
pub async fn export_handler(
    _admin: AdminUser,
    Extension(repo): Extension<LeadRepo>,
    Extension(locale): Extension<LocaleConfig>,
) -> Response {
    let leads = match repo.list() {
        Ok(leads) => leads,
        Err(e) => {
            tracing::error!(error = %e, "lead export failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    match leads_csv(&leads, &locale.timezone) {
        Ok(csv) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"leads.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "csv rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::create_token;
    use crate::config::auth::AuthConfig;
    use crate::store::port::test_support::MemoryStore;
    use crate::time::clock::test_support::FixedClock;
    use axum::{
        body::Body,
        http::Request,
        routing::{get, post},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_auth_config() -> AuthConfig {
        AuthConfig::from_env_with(|key| match key {
            "ADMIN_PASSWORD" => Some("pw".to_string()),
            "ADMIN_TOKEN_SECRET" => Some("test-secret".to_string()),
            _ => None,
        })
    }

    fn build_router(millis: i64) -> (Router, String) {
        let auth = test_auth_config();
        let token = create_token("admin", &auth.token_secret, 1).unwrap();
        let repo = LeadRepo::new(
            Arc::new(MemoryStore::new()),
            Arc::new(FixedClock::at_millis(millis)),
        );
        let router = Router::new()
            .route("/api/leads", post(register_handler))
            .route("/api/admin/leads", get(admin_list_handler))
            .route("/api/admin/leads/export", get(export_handler))
            .layer(Extension(repo))
            .layer(Extension(auth))
            .layer(Extension(LocaleConfig {
                timezone: "America/Sao_Paulo".to_string(),
            }));
        (router, token)
    }

    fn register_req(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/leads")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn admin_get(uri: &str, token: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn register_returns_201_with_masked_lead() {
        let (app, _) = build_router(1_700_000_000_000);

        let res = app
            .oneshot(register_req(json!({
                "name": "Ana",
                "email": "Ana@Example.com",
                "phone": "11987654321",
                "cpf": "12345678900"
            })))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::CREATED);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        let lead: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(lead["email"], "ana@example.com");
        assert_eq!(lead["phone"], "(11) 98765-4321");
        assert_eq!(lead["cpf"], "123.456.789-00");
        assert_eq!(lead["createdAt"], 1_700_000_000_000i64);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let (app, _) = build_router(0);
        let payload = json!({"name": "Ana", "email": "a@b.c", "phone": "", "cpf": ""});

        let first = app.clone().oneshot(register_req(payload.clone())).await.unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app.oneshot(register_req(payload)).await.unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn blank_name_is_unprocessable() {
        let (app, _) = build_router(0);
        let res = app
            .oneshot(register_req(
                json!({"name": " ", "email": "a@b.c", "phone": "", "cpf": ""}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn admin_list_requires_a_token() {
        let (app, _) = build_router(0);
        let res = app
            .oneshot(
                Request::builder()
                    .uri("/api/admin/leads")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn admin_list_filters_by_search() {
        let (app, token) = build_router(0);
        for (name, email) in [("Ana Souza", "ana@x.c"), ("Bruno", "bruno@x.c")] {
            let res = app
                .clone()
                .oneshot(register_req(
                    json!({"name": name, "email": email, "phone": "", "cpf": ""}),
                ))
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        let res = app
            .oneshot(admin_get("/api/admin/leads?search=souza", &token))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        let leads: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(leads.as_array().unwrap().len(), 1);
        assert_eq!(leads[0]["name"], "Ana Souza");
    }

    #[tokio::test]
    async fn export_is_an_attached_csv() {
        let (app, token) = build_router(1_731_695_400_000);
        app.clone()
            .oneshot(register_req(
                json!({"name": "Ana", "email": "a@b.c", "phone": "11987654321", "cpf": ""}),
            ))
            .await
            .unwrap();

        let res = app
            .oneshot(admin_get("/api/admin/leads/export", &token))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/csv; charset=utf-8"
        );
        assert!(res
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .contains("leads.csv"));

        let body = res.into_body().collect().await.unwrap().to_bytes();
        let csv = String::from_utf8(body.to_vec()).unwrap();
        assert!(csv.starts_with("ID,Name,Email,Phone,Registered\r\n"));
        assert!(csv.contains("15/11/2024 15:30"));
    }
}
