// Threat Telemetry - Statistics Aggregation
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Grouped counts and rates over a filtered event set.

use crate::models::ThreatEvent;

use super::models::{AggregateStats, GroupedCounts, SeverityCounts};

/// Fold `events` into aggregate statistics.
pub fn compute(events: &[ThreatEvent]) -> AggregateStats {
    let mut by_country = GroupedCounts::new();
    let mut by_attack_type = GroupedCounts::new();
    let mut by_severity = SeverityCounts::default();
    let mut blocked = 0;
    let mut critical = 0;

    for event in events {
        by_country.increment(&event.country);
        by_attack_type.increment(event.attack_type.as_str());
        by_severity.increment(event.severity);
        if event.blocked {
            blocked += 1;
        }
        if event.is_critical() {
            critical += 1;
        }
    }

    let total = events.len();
    AggregateStats {
        total,
        blocked,
        critical,
        success_rate: success_rate(blocked, total),
        by_country,
        by_attack_type,
        by_severity,
    }
}

/// Blocked share rounded to the nearest whole percent.
///
/// An empty set has a rate of 0.
pub fn success_rate(blocked: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (blocked as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttackType, Severity, ThreatId, COUNTRIES};

    fn event(country: usize, severity: Severity, blocked: bool) -> ThreatEvent {
        ThreatEvent::new(
            ThreatId(country as u64),
            &COUNTRIES[country],
            AttackType::Phishing,
            "8.8.8.8".to_string(),
            severity,
            "9:15:00 AM".to_string(),
            blocked,
        )
    }

    #[test]
    fn test_empty_set() {
        let stats = compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.blocked, 0);
        assert_eq!(stats.critical, 0);
        assert_eq!(stats.success_rate, 0);
        assert!(stats.by_country.is_empty());
        assert!(stats.by_attack_type.is_empty());
        assert_eq!(stats.by_severity.series().len(), 4);
        assert!(stats.by_severity.series().iter().all(|(_, c)| *c == 0));
    }

    #[test]
    fn test_mixed_severity_scenario() {
        let events = vec![
            event(0, Severity::Critical, true),
            event(1, Severity::Low, false),
            event(0, Severity::Critical, false),
        ];
        let stats = compute(&events);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.blocked, 1);
        assert_eq!(stats.critical, 2);
        assert_eq!(stats.success_rate, 33);
        assert_eq!(stats.by_severity.critical, 2);
        assert_eq!(stats.by_severity.medium, 0);
        assert_eq!(stats.by_country.get("USA"), Some(2));
        assert_eq!(stats.by_attack_type.get("Phishing"), Some(3));
    }

    #[test]
    fn test_success_rate_rounding() {
        assert_eq!(success_rate(2, 3), 67);
        assert_eq!(success_rate(1, 8), 13);
        assert_eq!(success_rate(5, 5), 100);
        assert_eq!(success_rate(0, 0), 0);
    }

    #[test]
    fn test_country_chart_limited_to_ten() {
        let mut events = Vec::new();
        for (i, _) in COUNTRIES.iter().enumerate() {
            for _ in 0..=i {
                events.push(event(i, Severity::Medium, false));
            }
        }
        let chart = compute(&events).country_chart();
        assert_eq!(chart.len(), 10);
        assert_eq!(chart[0], ("Australia".to_string(), 10));
        assert_eq!(chart[9], ("USA".to_string(), 1));
    }
}
