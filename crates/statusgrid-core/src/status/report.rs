//! Per-server outcomes and the aggregated fleet report.
//!
//! The probe layer produces one `ProbeOutcome` per configured server;
//! `aggregate` folds them into an `AggregateResult` in input order.
//! Aggregation cannot fail — every failure mode is already captured in
//! `ProbeFailure` by the time it reaches this module.

use serde::Serialize;
use thiserror::Error;

use crate::status::tier::{classify_server, classify_total, Tier};

/// Why a server classified as Offline.
///
/// Kept as data rather than an error so the surrounding system can log
/// and expose it while the page still renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbeFailure {
    /// Connection failure, timeout, or body-read error.
    #[error("transport: {message}")]
    Transport { message: String },
    /// Endpoint answered with a non-success HTTP status.
    #[error("http status {status}")]
    HttpStatus { status: u16 },
    /// Body was not a bare unsigned decimal integer.
    #[error("body is not a count: {body:?}")]
    NotNumeric { body: String },
}

/// Result of probing one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Endpoint answered with a valid count. `raw` is the trimmed body
    /// as received (it may carry leading zeros).
    Online { count: u64, raw: String },
    /// Anything else: connection failure, HTTP error, junk body.
    Unreachable(ProbeFailure),
}

/// One row of the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct ServerStatus {
    /// Display name from the config. Not guaranteed unique.
    pub label: String,
    /// Trimmed response body; present iff reachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// Parsed count; present iff reachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_count: Option<u64>,
    pub reachable: bool,
    pub tier: Tier,
    /// Present iff unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<ProbeFailure>,
}

/// The full fleet report: one row per configured server plus totals.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    pub servers: Vec<ServerStatus>,
    pub total_online: u64,
    /// Total tier is never `Offline`; an all-offline fleet is Normal.
    pub total_tier: Tier,
}

/// Fold probe outcomes into a report, preserving input order.
///
/// Unreachable servers contribute 0 to the total but still count in
/// the total-tier denominator.
pub fn aggregate(probed: Vec<(String, ProbeOutcome)>) -> AggregateResult {
    let configured = probed.len();
    let mut total_online: u64 = 0;
    let mut servers = Vec::with_capacity(configured);

    for (label, outcome) in probed {
        let status = match outcome {
            ProbeOutcome::Online { count, raw } => {
                total_online = total_online.saturating_add(count);
                ServerStatus {
                    label,
                    raw: Some(raw),
                    online_count: Some(count),
                    reachable: true,
                    tier: classify_server(count),
                    failure: None,
                }
            }
            ProbeOutcome::Unreachable(failure) => ServerStatus {
                label,
                raw: None,
                online_count: None,
                reachable: false,
                tier: Tier::Offline,
                failure: Some(failure),
            },
        };
        servers.push(status);
    }

    AggregateResult {
        servers,
        total_online,
        total_tier: classify_total(total_online, configured),
    }
}
