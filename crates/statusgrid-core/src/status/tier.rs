//! Load tier thresholds and classification.
//!
//! Thresholds are strict `>` and checked high-to-low, first match wins.
//! The total check divides against the CONFIGURED server count, not the
//! reachable count, so offline servers widen the normal band.

use serde::{Deserialize, Serialize};

/// A server is High Load above this count.
pub const SERVER_HIGH_LOAD_ABOVE: u64 = 300;
/// A server is Busy above this count (checked after High Load).
pub const SERVER_BUSY_ABOVE: u64 = 200;
/// The total is High Load above this many users per configured server.
pub const TOTAL_HIGH_LOAD_PER_SERVER: u64 = 400;
/// The total is Busy above this many users per configured server.
pub const TOTAL_BUSY_PER_SERVER: u64 = 300;

/// Classification bucket for one server or for the fleet total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Normal,
    Busy,
    HighLoad,
    Offline,
}

impl Tier {
    /// Display string shown in the rendered page.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Normal => "Normal",
            Tier::Busy => "Busy",
            Tier::HighLoad => "High Load",
            Tier::Offline => "Offline",
        }
    }
}

/// Classify one server's online count. Never returns `Offline`;
/// that tier is reserved for unreachable servers.
pub fn classify_server(count: u64) -> Tier {
    if count > SERVER_HIGH_LOAD_ABOVE {
        Tier::HighLoad
    } else if count > SERVER_BUSY_ABOVE {
        Tier::Busy
    } else {
        Tier::Normal
    }
}

/// Classify the summed total against `configured` servers.
///
/// `configured` is the number of servers in the config, offline ones
/// included. An empty fleet (total 0, configured 0) is Normal.
pub fn classify_total(total: u64, configured: usize) -> Tier {
    let n = configured as u64;
    if total > TOTAL_HIGH_LOAD_PER_SERVER.saturating_mul(n) {
        Tier::HighLoad
    } else if total > TOTAL_BUSY_PER_SERVER.saturating_mul(n) {
        Tier::Busy
    } else {
        Tier::Normal
    }
}
