// Threat Telemetry - Statistics Models
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Data structures for telemetry statistics.

use serde::{Deserialize, Serialize};

use crate::models::Severity;

/// One chart sample, taken on every event tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesSample {
    /// Local time label, `HH:MM:SS`.
    pub time: String,
    pub attacks: u32,
    pub blocked: u32,
    pub threats: u32,
}

/// Counts keyed by freely occurring labels, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedCounts {
    entries: Vec<(String, usize)>,
}

impl GroupedCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation of `key`.
    pub fn increment(&mut self, key: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((key.to_string(), 1)),
        }
    }

    /// Count for `key`, or `None` if never observed.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// The `n` largest groups, descending by count.
    ///
    /// Ties keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(n);
        sorted
    }
}

/// Per-severity counts. All four levels are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl SeverityCounts {
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Critical => self.critical,
        }
    }

    pub fn increment(&mut self, severity: Severity) {
        let slot = match severity {
            Severity::Low => &mut self.low,
            Severity::Medium => &mut self.medium,
            Severity::High => &mut self.high,
            Severity::Critical => &mut self.critical,
        };
        *slot += 1;
    }

    /// Chart series, always `Low..Critical` including empty levels.
    pub fn series(&self) -> Vec<(Severity, usize)> {
        Severity::ALL.iter().map(|&s| (s, self.get(s))).collect()
    }
}

/// Derived statistics over a filtered event set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total: usize,
    pub blocked: usize,
    pub critical: usize,
    /// Blocked share in whole percent; 0 when there are no events.
    pub success_rate: u32,
    pub by_country: GroupedCounts,
    pub by_attack_type: GroupedCounts,
    pub by_severity: SeverityCounts,
}

/// Maximum number of bars in the country chart.
pub const COUNTRY_CHART_LIMIT: usize = 10;

impl AggregateStats {
    /// Country bars for charting, largest first.
    pub fn country_chart(&self) -> Vec<(String, usize)> {
        self.by_country.top(COUNTRY_CHART_LIMIT)
    }

    /// Attack type bars in first-seen order.
    pub fn attack_type_series(&self) -> Vec<(String, usize)> {
        self.by_attack_type
            .iter()
            .map(|(k, c)| (k.to_string(), c))
            .collect()
    }
}
