//! Shared application state for the statusgrid dashboard.

use std::sync::Arc;
use std::time::Duration;

use crate::config::DashboardConfig;
use crate::obs::metrics::DashboardMetrics;
use crate::probe::{HttpProbe, StatusProbe};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: DashboardConfig,
    probe: Box<dyn StatusProbe>,
    metrics: DashboardMetrics,
}

impl AppState {
    /// Build application state with the reqwest-backed probe.
    pub fn new(cfg: DashboardConfig) -> Self {
        let probe = HttpProbe::new(Duration::from_millis(cfg.dashboard.request_timeout_ms));
        Self::with_probe(cfg, Box::new(probe))
    }

    /// Build with an explicit probe (tests use a scripted one).
    pub fn with_probe(cfg: DashboardConfig, probe: Box<dyn StatusProbe>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                probe,
                metrics: DashboardMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &DashboardConfig {
        &self.inner.cfg
    }

    pub fn probe(&self) -> &dyn StatusProbe {
        self.inner.probe.as_ref()
    }

    pub fn metrics(&self) -> &DashboardMetrics {
        &self.inner.metrics
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }
}
