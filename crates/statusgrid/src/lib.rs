//! Top-level facade crate for statusgrid.
//!
//! Re-exports core types and the dashboard library so users can depend on a single crate.

pub mod core {
    pub use statusgrid_core::*;
}

pub mod dashboard {
    pub use statusgrid_dashboard::*;
}
