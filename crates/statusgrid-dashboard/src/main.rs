//! statusgrid dashboard
//!
//! On each page request: poll every configured endpoint sequentially,
//! classify each count into a load tier, sum the total, render the
//! table. Nothing persists between requests.

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use statusgrid_dashboard::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "statusgrid.yaml".to_string());
    let cfg = config::load_from_file(&path).expect("config load failed");
    let listen: SocketAddr = cfg
        .dashboard
        .listen
        .parse()
        .expect("dashboard.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state.clone());

    tracing::info!(%listen, servers = state.cfg().servers.len(), "statusgrid-dashboard starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .expect("server failed");
}

async fn shutdown_signal(state: app_state::AppState) {
    let _ = tokio::signal::ctrl_c().await;
    state.set_draining();
    tracing::info!("shutdown signal received, draining");
}
