//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, web};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(web::dashboard))
        .route("/api/status", get(web::status_json))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
