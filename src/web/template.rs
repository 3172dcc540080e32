//! # Askama Template Rendering Helpers
//!
//! Utility functions for rendering [Askama](https://crates.io/crates/askama)
//! templates into [Axum](https://crates.io/crates/axum) HTML responses.
//!
//! The landing page is the only server-rendered surface; these helpers keep
//! its handlers down to "load data, render, done" while render failures
//! collapse to a plain 500.
//!
//! # Examples
//! ```rust,no_run
//! use askama::Template;
//! use axum::{response::Response, http::StatusCode};
//! use festa_web::web::template::{render_template, render_template_with_status};
//!
//! #[derive(Template)]
//! #[template(source = "<h1>{{ event }}</h1>", ext = "html")]
//! struct BannerTemplate<'a> {
//!     event: &'a str,
//! }
//!
//! fn example() -> Response {
//!     let tmpl = BannerTemplate { event: "Festa Brasil" };
//!     render_template_with_status(tmpl, StatusCode::OK)
//! }
//! ```

use askama::Template;
use axum::{
    http::{Response, StatusCode},
    response::Response as AxumResponse,
};

/// Renders an [`askama::Template`] into an HTML [`AxumResponse`].
///
/// On success, returns `200 OK` with content type `text/html`.
/// On render failure, returns `500 Internal Server Error`.
pub fn render_template<T: Template>(template: T) -> AxumResponse {
    match template.render() {
        Ok(html) => Response::builder()
            .header("Content-Type", "text/html; charset=utf-8")
            .body(axum::body::Body::from(html))
            .unwrap(),
        Err(_) => Response::builder()
            .status(500)
            .body(axum::body::Body::from("Internal Server Error"))
            .unwrap(),
    }
}

/// Renders an [`askama::Template`] with a custom HTTP status code.
pub fn render_template_with_status<T: Template>(template: T, status: StatusCode) -> AxumResponse {
    let mut resp = render_template(template);
    *resp.status_mut() = status;
    resp
}
