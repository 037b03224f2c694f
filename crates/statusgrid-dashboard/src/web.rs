//! Dashboard HTTP handlers.
//!
//! Both handlers poll the whole fleet on every request; nothing is
//! cached between requests.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::app_state::AppState;
use crate::{poll, render};

/// `GET /` — poll, aggregate, render the HTML dashboard.
///
/// The CSP header allows embedding the page in any frame, matching the
/// upstream deployments this feeds.
pub async fn dashboard(State(app): State<AppState>) -> Response {
    let report = poll::poll_servers(app.probe(), &app.cfg().servers, app.metrics()).await;
    app.metrics().page_renders.inc(&[("format", "html")]);

    let body = render::page(&app.cfg().dashboard.page_title, &report);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CONTENT_SECURITY_POLICY, "frame-ancestors *"),
        ],
        body,
    )
        .into_response()
}

/// `GET /api/status` — same poll, machine-readable report with
/// explicit per-server failure reasons.
pub async fn status_json(State(app): State<AppState>) -> Response {
    let report = poll::poll_servers(app.probe(), &app.cfg().servers, app.metrics()).await;
    app.metrics().page_renders.inc(&[("format", "json")]);

    Json(report).into_response()
}
