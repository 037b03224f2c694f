use serde::Deserialize;
use statusgrid_core::error::{Result, StatusGridError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    pub version: u32,

    #[serde(default)]
    pub dashboard: DashboardSection,

    #[serde(default)]
    pub servers: Vec<ServerEntry>,
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(StatusGridError::UnsupportedVersion);
        }
        if self.servers.is_empty() {
            return Err(StatusGridError::BadConfig("servers must not be empty".into()));
        }

        self.dashboard.validate()?;
        for server in &self.servers {
            server.validate()?;
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_page_title")]
    pub page_title: String,
}

impl Default for DashboardSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            request_timeout_ms: default_request_timeout_ms(),
            page_title: default_page_title(),
        }
    }
}

impl DashboardSection {
    pub fn validate(&self) -> Result<()> {
        if !(500..=30000).contains(&self.request_timeout_ms) {
            return Err(StatusGridError::BadConfig(
                "dashboard.request_timeout_ms must be between 500 and 30000".into(),
            ));
        }
        if self.page_title.trim().is_empty() {
            return Err(StatusGridError::BadConfig(
                "dashboard.page_title must not be blank".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_request_timeout_ms() -> u64 {
    3000
}
fn default_page_title() -> String {
    "Server Status".into()
}

/// One upstream server: display label + status endpoint.
/// Order in the config is display order; labels need not be unique.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerEntry {
    pub label: String,
    pub endpoint: String,
}

impl ServerEntry {
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(StatusGridError::BadConfig(
                "server label must not be blank".into(),
            ));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(StatusGridError::BadConfig(format!(
                "server {:?} endpoint must be an http(s) URL: {}",
                self.label, self.endpoint
            )));
        }
        Ok(())
    }
}
