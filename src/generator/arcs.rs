// Threat Telemetry - Attack Map Feed
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Synthetic arcs for the global attack map.

use rand::rngs::StdRng;
use rand::Rng;

use crate::models::{AttackArc, ARC_COLORS, ARC_KINDS};

use super::make_rng;

#[derive(Debug)]
pub struct AttackMapFeed {
    rng: StdRng,
}

impl Default for AttackMapFeed {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AttackMapFeed {
    pub fn new(seed: Option<u64>) -> Self {
        Self { rng: make_rng(seed) }
    }

    /// Generate one arc and a fresh attack rate in [30, 50).
    pub fn tick(&mut self) -> (AttackArc, u32) {
        let arc = self.next_arc();
        let rate = self.rng.gen_range(30..50);
        (arc, rate)
    }

    pub fn next_arc(&mut self) -> AttackArc {
        let start_lat = self.rng.gen_range(-90.0..90.0);
        let start_lng = self.rng.gen_range(-180.0..180.0);
        let end_lat = self.rng.gen_range(-90.0..90.0);
        let end_lng = self.rng.gen_range(-180.0..180.0);
        let color = ARC_COLORS[self.rng.gen_range(0..ARC_COLORS.len())].to_string();
        let kind = ARC_KINDS[self.rng.gen_range(0..ARC_KINDS.len())].to_string();
        // Octets stop at 254 on the map.
        let octets: Vec<String> = (0..4)
            .map(|_| self.rng.gen_range(0..255u8).to_string())
            .collect();

        AttackArc {
            start_lat,
            start_lng,
            end_lat,
            end_lng,
            color,
            kind,
            ip: octets.join("."),
        }
    }
}
