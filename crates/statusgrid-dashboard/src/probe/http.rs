//! reqwest-backed probe.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use statusgrid_core::status::body::parse_online_count;
use statusgrid_core::{ProbeFailure, ProbeOutcome};

use crate::probe::StatusProbe;

/// Longest body prefix retained in a `NotNumeric` failure.
const BODY_SNIPPET_MAX: usize = 120;

/// HTTP GET probe with fixed per-request and connect timeouts.
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout / 2)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "failed to build HTTP client with custom timeouts, using default");
                Client::new()
            });

        Self { client }
    }
}

fn body_snippet(body: &str) -> String {
    let s = body.trim();
    if s.len() <= BODY_SNIPPET_MAX {
        return s.to_string();
    }
    let mut end = BODY_SNIPPET_MAX;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_string()
}

#[async_trait]
impl StatusProbe for HttpProbe {
    async fn fetch_count(&self, endpoint: &str) -> ProbeOutcome {
        let resp = match self.client.get(endpoint).send().await {
            Ok(r) => r,
            Err(e) => {
                return ProbeOutcome::Unreachable(ProbeFailure::Transport {
                    message: e.to_string(),
                })
            }
        };

        let status = resp.status();
        if !status.is_success() {
            return ProbeOutcome::Unreachable(ProbeFailure::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = match resp.text().await {
            Ok(b) => b,
            Err(e) => {
                return ProbeOutcome::Unreachable(ProbeFailure::Transport {
                    message: e.to_string(),
                })
            }
        };

        match parse_online_count(&body) {
            Some(count) => ProbeOutcome::Online {
                count,
                raw: body.trim().to_string(),
            },
            None => ProbeOutcome::Unreachable(ProbeFailure::NotNumeric {
                body: body_snippet(&body),
            }),
        }
    }
}
