//! Shared error type across statusgrid crates.
//!
//! Only the configuration/boot path is fallible. Upstream probe
//! failures are modeled as data (`ProbeFailure`) and never pass
//! through here.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatusGridError>;

/// Unified error type used by core and dashboard.
#[derive(Debug, Error)]
pub enum StatusGridError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl StatusGridError {
    /// Stable code string used in logs and operational output.
    pub fn code(&self) -> &'static str {
        match self {
            StatusGridError::BadConfig(_) => "BAD_CONFIG",
            StatusGridError::UnsupportedVersion => "UNSUPPORTED_VERSION",
            StatusGridError::Internal(_) => "INTERNAL",
        }
    }
}
