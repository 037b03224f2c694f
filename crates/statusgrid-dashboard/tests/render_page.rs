//! Renderer assertions over a built report.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use statusgrid_core::{aggregate, ProbeFailure, ProbeOutcome};
use statusgrid_dashboard::render;

fn online(count: u64) -> ProbeOutcome {
    ProbeOutcome::Online {
        count,
        raw: count.to_string(),
    }
}

#[test]
fn rows_and_total_line() {
    let report = aggregate(vec![
        ("TH-01".into(), online(150)),
        ("TH-02".into(), online(250)),
        ("TH-03".into(), online(350)),
        (
            "TH-04".into(),
            ProbeOutcome::Unreachable(ProbeFailure::Transport {
                message: "timed out".into(),
            }),
        ),
    ]);

    let html = render::page("Server Status", &report);

    assert!(html.contains("<title>Server Status</title>"));
    assert!(html.contains("TH-01"));
    assert!(html.contains("Online 150 people"));
    // Tier badges follow the per-server ladder.
    assert!(html.contains(">Normal</span>"));
    assert!(html.contains(">Busy</span>"));
    assert!(html.contains(">High Load</span>"));
    // Unreachable rows carry no count.
    assert!(html.contains("Unable to connect"));
    assert!(!html.contains("Online 0 people"));
    // 750 over 4 configured servers stays Normal.
    assert!(html.contains("Total online users:"));
    assert!(html.contains(">750</span> people"));
    assert_eq!(html.matches("<tr>").count(), 5, "header plus one row per server");
}

#[test]
fn offline_fleet_renders_zero_total() {
    let report = aggregate(vec![(
        "TH-01".into(),
        ProbeOutcome::Unreachable(ProbeFailure::HttpStatus { status: 502 }),
    )]);

    let html = render::page("Server Status", &report);
    assert!(html.contains("Unable to connect"));
    assert!(html.contains(">0</span> people"));
    // An all-offline fleet totals Normal (green).
    assert!(html.contains("class=\"online\"><span class=\"status-dot dot-green\""));
}

#[test]
fn labels_and_title_are_escaped() {
    let report = aggregate(vec![("<script>alert(1)</script>".into(), online(1))]);

    let html = render::page("Status <&> \"Board\"", &report);
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("Status &lt;&amp;&gt; &quot;Board&quot;"));
}

#[test]
fn total_tier_drives_summary_styling() {
    // 350 over 1 configured server is Busy (not > 400).
    let busy = aggregate(vec![("TH-01".into(), online(350))]);
    let html = render::page("Server Status", &busy);
    assert!(html.contains("class=\"online-warning\"><span class=\"status-dot dot-yellow\""));

    // 401 over 1 configured server tips into High Load.
    let hot = aggregate(vec![("TH-01".into(), online(401))]);
    let html = render::page("Server Status", &hot);
    assert!(html.contains("class=\"online-danger\"><span class=\"status-dot dot-red\""));
}
