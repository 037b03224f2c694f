//! Sequential poll over the configured fleet.
//!
//! One probe at a time, in configured order; the next endpoint is not
//! touched until the current one answered or timed out. Per-probe
//! durations and outcomes feed the metrics registry.

use std::time::Instant;

use tracing::{debug, warn};

use statusgrid_core::{aggregate, AggregateResult, ProbeFailure, ProbeOutcome};

use crate::config::ServerEntry;
use crate::obs::metrics::DashboardMetrics;
use crate::probe::StatusProbe;

fn outcome_label(outcome: &ProbeOutcome) -> &'static str {
    match outcome {
        ProbeOutcome::Online { .. } => "online",
        ProbeOutcome::Unreachable(ProbeFailure::Transport { .. }) => "transport",
        ProbeOutcome::Unreachable(ProbeFailure::HttpStatus { .. }) => "http_status",
        ProbeOutcome::Unreachable(ProbeFailure::NotNumeric { .. }) => "not_numeric",
    }
}

/// Probe every server in configured order and fold the outcomes into a
/// fleet report. Never fails; an all-down fleet still reports.
pub async fn poll_servers(
    probe: &dyn StatusProbe,
    servers: &[ServerEntry],
    metrics: &DashboardMetrics,
) -> AggregateResult {
    let mut probed = Vec::with_capacity(servers.len());

    for entry in servers {
        let started = Instant::now();
        let outcome = probe.fetch_count(&entry.endpoint).await;

        metrics
            .probe_duration
            .observe(&[("server", entry.label.as_str())], started.elapsed());
        metrics.probes_total.inc(&[
            ("server", entry.label.as_str()),
            ("outcome", outcome_label(&outcome)),
        ]);

        match &outcome {
            ProbeOutcome::Online { count, .. } => {
                metrics.online_users.set(
                    &[("server", entry.label.as_str())],
                    i64::try_from(*count).unwrap_or(i64::MAX),
                );
                debug!(server = %entry.label, count, "probe ok");
            }
            ProbeOutcome::Unreachable(failure) => {
                metrics.online_users.set(&[("server", entry.label.as_str())], 0);
                warn!(server = %entry.label, endpoint = %entry.endpoint, %failure, "probe failed");
            }
        }

        probed.push((entry.label.clone(), outcome));
    }

    let report = aggregate(probed);
    metrics
        .total_online
        .set(&[], i64::try_from(report.total_online).unwrap_or(i64::MAX));
    report
}
