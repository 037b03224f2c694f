//! Dashboard config loader (strict parsing).

pub mod schema;

use std::fs;

use statusgrid_core::error::{Result, StatusGridError};

pub use schema::{DashboardConfig, DashboardSection, ServerEntry};

pub fn load_from_file(path: &str) -> Result<DashboardConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| StatusGridError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<DashboardConfig> {
    let cfg: DashboardConfig = serde_yaml::from_str(s)
        .map_err(|e| StatusGridError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
