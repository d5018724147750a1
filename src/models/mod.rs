// Threat Telemetry - Models
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Data models for telemetry entities.

mod arc;
mod network;
mod prediction;
mod threat;

pub use arc::{AttackArc, MapCounters, ARC_COLORS, ARC_KINDS, MAP_TOTAL_BASELINE};
pub use network::{fallback_networks, NetworkRecord};
pub use prediction::{PredictionChartPoint, PredictionRecord};
pub use threat::{AttackType, Country, Severity, ThreatEvent, ThreatId, COUNTRIES};
