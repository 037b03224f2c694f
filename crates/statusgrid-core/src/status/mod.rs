//! Status domain (tiers + body parsing + aggregation).
//!
//! Three pieces make up the contract:
//! - `tier`: the fixed threshold ladder for one server and for the total.
//! - `body`: what counts as a valid upstream response body.
//! - `report`: per-server outcomes folded into one `AggregateResult`.
//!
//! All of it is pure and panic-free: malformed input classifies as
//! `Offline` instead of erroring, so a page render always completes.

pub mod body;
pub mod report;
pub mod tier;
