// Threat Telemetry - Event Generator
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Synthetic threat events and chart samples.

use chrono::{Local, Utc};
use rand::rngs::StdRng;
use rand::Rng;

use crate::models::{AttackType, Severity, ThreatEvent, ThreatId, COUNTRIES};
use crate::stats::TimeSeriesSample;

use super::make_rng;

/// Produces one threat event and one chart sample per tick.
#[derive(Debug)]
pub struct EventGenerator {
    rng: StdRng,
    last_id: u64,
}

impl Default for EventGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl EventGenerator {
    /// Create a generator, deterministic when `seed` is set.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: make_rng(seed),
            last_id: 0,
        }
    }

    /// Generate the event and sample for one tick.
    pub fn tick(&mut self, secured: bool) -> (ThreatEvent, TimeSeriesSample) {
        (self.next_event(secured), self.next_sample())
    }

    /// Generate a threat event. `secured` becomes its blocked flag.
    pub fn next_event(&mut self, secured: bool) -> ThreatEvent {
        let origin = &COUNTRIES[self.rng.gen_range(0..COUNTRIES.len())];
        let attack_type = AttackType::ALL[self.rng.gen_range(0..AttackType::ALL.len())];
        let severity = Severity::ALL[self.rng.gen_range(0..Severity::ALL.len())];
        let id = self.next_id();
        let ip = self.random_ip();

        ThreatEvent::new(
            id,
            origin,
            attack_type,
            ip,
            severity,
            Local::now().format("%-I:%M:%S %p").to_string(),
            secured,
        )
    }

    /// Generate a chart sample. Counters are independent of any event.
    pub fn next_sample(&mut self) -> TimeSeriesSample {
        TimeSeriesSample {
            time: Local::now().format("%H:%M:%S").to_string(),
            attacks: self.rng.gen_range(20..70),
            blocked: self.rng.gen_range(15..55),
            threats: self.rng.gen_range(10..40),
        }
    }

    /// Millisecond timestamp with a random tiebreak, strictly increasing per generator.
    fn next_id(&mut self) -> ThreatId {
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        let candidate = millis * 1000 + self.rng.gen_range(0..1000);
        let id = candidate.max(self.last_id + 1);
        self.last_id = id;
        ThreatId(id)
    }

    /// Four independent bytes. Reserved and unroutable ranges are not excluded.
    fn random_ip(&mut self) -> String {
        let octets: [u8; 4] = self.rng.gen();
        format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
    }
}
