//! HttpProbe integration tests against a local fixture server.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};

use statusgrid_core::{ProbeFailure, ProbeOutcome};
use statusgrid_dashboard::probe::{HttpProbe, StatusProbe};

async fn spawn_fixture() -> SocketAddr {
    let app = Router::new()
        .route("/online", get(|| async { "17" }))
        .route("/padded", get(|| async { " 007\n" }))
        .route("/garbage", get(|| async { "maintenance" }))
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn probe() -> HttpProbe {
    HttpProbe::new(Duration::from_millis(2000))
}

#[tokio::test]
async fn bare_count_is_online() {
    let addr = spawn_fixture().await;
    match probe().fetch_count(&format!("http://{addr}/online")).await {
        ProbeOutcome::Online { count, raw } => {
            assert_eq!(count, 17);
            assert_eq!(raw, "17");
        }
        other => panic!("expected online, got {other:?}"),
    }
}

#[tokio::test]
async fn padded_count_is_trimmed() {
    let addr = spawn_fixture().await;
    match probe().fetch_count(&format!("http://{addr}/padded")).await {
        ProbeOutcome::Online { count, raw } => {
            assert_eq!(count, 7);
            assert_eq!(raw, "007");
        }
        other => panic!("expected online, got {other:?}"),
    }
}

#[tokio::test]
async fn junk_body_is_not_numeric() {
    let addr = spawn_fixture().await;
    match probe().fetch_count(&format!("http://{addr}/garbage")).await {
        ProbeOutcome::Unreachable(ProbeFailure::NotNumeric { body }) => {
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected not_numeric, got {other:?}"),
    }
}

#[tokio::test]
async fn error_status_is_unreachable() {
    let addr = spawn_fixture().await;
    match probe().fetch_count(&format!("http://{addr}/broken")).await {
        ProbeOutcome::Unreachable(ProbeFailure::HttpStatus { status }) => {
            assert_eq!(status, 500);
        }
        other => panic!("expected http_status, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_route_is_unreachable() {
    let addr = spawn_fixture().await;
    match probe().fetch_count(&format!("http://{addr}/nope")).await {
        ProbeOutcome::Unreachable(ProbeFailure::HttpStatus { status }) => {
            assert_eq!(status, 404);
        }
        other => panic!("expected http_status, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_refused_is_transport() {
    // Grab a free port, then close the listener before probing it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    match probe().fetch_count(&format!("http://{addr}/online")).await {
        ProbeOutcome::Unreachable(ProbeFailure::Transport { message }) => {
            assert!(!message.is_empty());
        }
        other => panic!("expected transport failure, got {other:?}"),
    }
}
