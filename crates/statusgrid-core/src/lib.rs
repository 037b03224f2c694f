//! statusgrid core: load tiers, response-body parsing, and aggregation.
//!
//! This crate defines the classification contract and the per-server /
//! fleet-wide result types shared by the dashboard and by tooling. It
//! intentionally carries no transport or runtime dependencies so the
//! whole contract stays testable without network access.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Aggregation never fails: unreachable or garbage upstream responses
//! fold into `Offline` rows instead of surfacing as errors.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod status;

/// Shared result type.
pub use error::{Result, StatusGridError};
pub use status::report::{aggregate, AggregateResult, ProbeFailure, ProbeOutcome, ServerStatus};
pub use status::tier::Tier;
