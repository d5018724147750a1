// Threat Telemetry - Prediction Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Forward-looking risk predictions.

use serde::{Deserialize, Serialize};

use super::AttackType;

/// A predicted attack against a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    #[serde(rename = "type")]
    pub attack_type: AttackType,
    /// Percentage in [70, 100), one decimal.
    pub probability: f64,
    pub target_region: String,
    /// Window such as `3-27h`.
    pub predicted_time: String,
    /// Percentage in [85, 100), one decimal.
    pub confidence: f64,
}

/// Chart point derived from a prediction, with its own risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionChartPoint {
    pub attack_type: AttackType,
    pub probability: f64,
    pub confidence: f64,
    /// Independent risk score in [0, 100).
    pub risk: u32,
}

impl PredictionChartPoint {
    /// Derive a chart point, copying probability and confidence from the record.
    pub fn from_record(record: &PredictionRecord, risk: u32) -> Self {
        Self {
            attack_type: record.attack_type,
            probability: record.probability,
            confidence: record.confidence,
            risk,
        }
    }
}
