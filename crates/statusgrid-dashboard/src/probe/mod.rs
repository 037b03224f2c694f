//! Upstream status probing.
//!
//! The trait keeps the poller testable without network access; the one
//! production implementation is `HttpProbe`.

pub mod http;

use async_trait::async_trait;

use statusgrid_core::ProbeOutcome;

pub use http::HttpProbe;

/// Fetch one endpoint's online-user count.
///
/// Probes never error: connection failures, HTTP error statuses, and
/// junk bodies all fold into `ProbeOutcome::Unreachable` with a reason.
#[async_trait]
pub trait StatusProbe: Send + Sync {
    async fn fetch_count(&self, endpoint: &str) -> ProbeOutcome;
}
