// Threat Telemetry - Attack Map Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Geographic attack arcs for the global map.

use serde::{Deserialize, Serialize};

/// Arc colors used by the map.
pub const ARC_COLORS: [&str; 3] = ["#ff003c", "#00f2ff", "#fdf500"];

/// Attack labels used by the map. Coarser than [`super::AttackType`].
pub const ARC_KINDS: [&str; 4] = ["DDoS", "Malware", "SQLi", "Brute Force"];

/// Initial value of the running attack total shown on the map.
pub const MAP_TOTAL_BASELINE: u64 = 12849;

/// A single animated attack between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackArc {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub color: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub ip: String,
}

/// Running counters displayed next to the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapCounters {
    pub total: u64,
    /// Attacks per second, redrawn every tick.
    pub rate: u32,
}

impl Default for MapCounters {
    fn default() -> Self {
        Self {
            total: MAP_TOTAL_BASELINE,
            rate: 42,
        }
    }
}
