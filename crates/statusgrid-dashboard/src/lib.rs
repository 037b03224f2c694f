//! statusgrid dashboard library entry.
//!
//! This crate wires the config loader, the upstream prober, the
//! sequential poller, the HTML renderer, and the operational endpoints
//! into one axum service. It is intended to be consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod poll;
pub mod probe;
pub mod render;
pub mod router;
pub mod web;
