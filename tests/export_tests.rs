// Threat Telemetry - Export Tests
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

use threat_telemetry::export::{export, to_delimited, ExportFormat, ExportOutcome};
use threat_telemetry::generator::EventGenerator;
use threat_telemetry::models::{AttackType, Severity, ThreatEvent, ThreatId, COUNTRIES};
use threat_telemetry::stats::{self, filter, FilterCriteria};
use threat_telemetry::TelemetryContext;

fn generated(n: usize) -> Vec<ThreatEvent> {
    let mut generator = EventGenerator::new(Some(n as u64));
    (0..n).map(|i| generator.next_event(i % 2 == 0)).collect()
}

#[test]
fn delimited_export_has_one_line_per_event_plus_header() {
    for n in [1, 2, 17, 120] {
        let events = generated(n);
        let text = to_delimited(&events).unwrap();
        assert!(text.ends_with("\r\n"));

        let lines: Vec<&str> = text.trim_end_matches("\r\n").split("\r\n").collect();
        assert_eq!(lines.len(), n + 1);

        let fields = lines[0].split(',').count();
        assert!(lines.iter().all(|l| l.split(',').count() == fields));
    }
}

#[test]
fn empty_log_exports_nothing() {
    let context = TelemetryContext::default();
    for format in ExportFormat::ALL {
        assert_eq!(context.export(format).unwrap(), ExportOutcome::NoData);
    }
}

#[test]
fn export_ignores_the_active_filter() {
    let context = TelemetryContext::default();
    let mut generator = EventGenerator::new(Some(12));
    for _ in 0..10 {
        let (event, sample) = generator.tick(false);
        context.record_threat(event, sample);
    }
    context.set_filter(FilterCriteria::from_labels("all", "all", "Critical").unwrap());

    let artifact = context.export(ExportFormat::Csv).unwrap().artifact().unwrap();
    let text = String::from_utf8(artifact.bytes).unwrap();
    assert_eq!(text.matches("\r\n").count(), 11);
}

#[test]
fn json_export_round_trips_ids() {
    let events = generated(5);
    let artifact = export(&events, ExportFormat::Json).unwrap().artifact().unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&artifact.bytes).unwrap();
    let ids: Vec<u64> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, events.iter().map(|e| e.id.0).collect::<Vec<_>>());
}

#[test]
fn stats_scenario_over_filtered_view() {
    let make = |id, severity, blocked| {
        ThreatEvent::new(
            ThreatId(id),
            &COUNTRIES[6],
            AttackType::Ransomware,
            "192.0.2.1".to_string(),
            severity,
            "8:00:00 AM".to_string(),
            blocked,
        )
    };
    let events = vec![
        make(3, Severity::Critical, true),
        make(2, Severity::Low, false),
        make(1, Severity::Critical, false),
    ];

    let filtered = filter::apply(&events, &FilterCriteria::default());
    let stats = stats::compute(&filtered);
    assert_eq!((stats.total, stats.blocked, stats.critical), (3, 1, 2));
    assert_eq!(stats.success_rate, 33);
    assert_eq!(stats.country_chart(), vec![("UK".to_string(), 3)]);
}
