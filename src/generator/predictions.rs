// Threat Telemetry - Prediction Stream
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Synthetic forward-looking risk predictions.

use rand::rngs::StdRng;
use rand::Rng;

use crate::models::{AttackType, PredictionChartPoint, PredictionRecord, COUNTRIES};

use super::make_rng;

/// Produces one prediction and its chart point per tick.
#[derive(Debug)]
pub struct PredictionStream {
    rng: StdRng,
}

impl Default for PredictionStream {
    fn default() -> Self {
        Self::new(None)
    }
}

impl PredictionStream {
    pub fn new(seed: Option<u64>) -> Self {
        Self { rng: make_rng(seed) }
    }

    /// Generate the record and chart point for one tick.
    pub fn tick(&mut self) -> (PredictionRecord, PredictionChartPoint) {
        let record = self.next_record();
        let risk = self.rng.gen_range(0..100);
        let point = PredictionChartPoint::from_record(&record, risk);
        (record, point)
    }

    pub fn next_record(&mut self) -> PredictionRecord {
        let attack_type = AttackType::ALL[self.rng.gen_range(0..AttackType::ALL.len())];
        let probability = self.percentage(70);
        let target_region = COUNTRIES[self.rng.gen_range(0..COUNTRIES.len())].name.to_string();
        let predicted_time = format!(
            "{}-{}h",
            self.rng.gen_range(1..=12),
            self.rng.gen_range(12..60)
        );
        let confidence = self.percentage(85);

        PredictionRecord {
            attack_type,
            probability,
            target_region,
            predicted_time,
            confidence,
        }
    }

    /// Uniform over `[floor, 100)` in steps of 0.1.
    fn percentage(&mut self, floor: u32) -> f64 {
        f64::from(self.rng.gen_range(floor * 10..1000)) / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_decimal(value: f64) -> bool {
        ((value * 10.0).round() - value * 10.0).abs() < 1e-9
    }

    #[test]
    fn test_record_ranges() {
        let mut stream = PredictionStream::new(Some(21));
        for _ in 0..1000 {
            let record = stream.next_record();
            assert!((70.0..100.0).contains(&record.probability));
            assert!((85.0..100.0).contains(&record.confidence));
            assert!(one_decimal(record.probability));
            assert!(one_decimal(record.confidence));
            assert!(COUNTRIES.iter().any(|c| c.name == record.target_region));
        }
    }

    #[test]
    fn test_predicted_time_window_format() {
        let mut stream = PredictionStream::new(Some(4));
        for _ in 0..500 {
            let record = stream.next_record();
            let window = record.predicted_time.strip_suffix('h').unwrap();
            let (start, end) = window.split_once('-').unwrap();
            let start: u32 = start.parse().unwrap();
            let end: u32 = end.parse().unwrap();
            assert!((1..=12).contains(&start));
            assert!((12..=59).contains(&end));
        }
    }

    #[test]
    fn test_chart_point_copies_record() {
        let mut stream = PredictionStream::new(Some(8));
        for _ in 0..200 {
            let (record, point) = stream.tick();
            assert_eq!(point.attack_type, record.attack_type);
            assert_eq!(point.probability, record.probability);
            assert_eq!(point.confidence, record.confidence);
            assert!(point.risk < 100);
        }
    }
}
