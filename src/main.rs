// Threat Telemetry - Main Entry Point
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Threat Telemetry - runs the aggregation pipeline and logs the dashboard.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use threat_telemetry::export::ExportFormat;
use threat_telemetry::network::{EnvToken, NetworkScanClient, TokenSource};
use threat_telemetry::{ExportOutcome, Pipeline, PipelineSchedule, Settings, TelemetryContext, TelemetryUpdate};

/// Log a dashboard summary after this many recorded threats.
const SUMMARY_EVERY: usize = 5;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let settings = Settings::new();
    info!("Loaded settings from {}", settings.path().display());
    let values = settings.values().clone();

    let context = TelemetryContext::new(values.start_secured);
    let pipeline = Pipeline::spawn(&context, PipelineSchedule::from(&values), values.rng_seed);

    let tokens: Arc<dyn TokenSource> = Arc::new(EnvToken::default());
    let scanner = NetworkScanClient::new(values.scan_url.clone(), tokens, values.scan_timings())?;
    let scan = scanner.start_scan();

    let mut updates = context.subscribe();
    let mut recorded = 0usize;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            update = updates.recv() => match update {
                Ok(TelemetryUpdate::ThreatRecorded(_)) => {
                    recorded += 1;
                    if recorded % SUMMARY_EVERY == 0 {
                        log_summary(&context);
                    }
                }
                Ok(TelemetryUpdate::PredictionRecorded(p)) => {
                    info!(
                        "Prediction: {} against {} in {} ({}%, confidence {}%)",
                        p.attack_type, p.target_region, p.predicted_time, p.probability, p.confidence
                    );
                }
                Ok(_) => {}
                Err(RecvError::Lagged(n)) => warn!("Dashboard skipped {} updates", n),
                Err(RecvError::Closed) => break,
            },
        }
    }

    pipeline.shutdown().await;

    match scan.await {
        Ok(outcome) => info!("Network scan: {} networks ({:?})", outcome.networks.len(), outcome.source),
        Err(e) => warn!("Network scan task failed: {}", e),
    }

    for format in ExportFormat::ALL {
        match context.export(format)? {
            ExportOutcome::Ready(artifact) => {
                info!("{} export ready: {} ({} bytes)", format, artifact.file_name, artifact.bytes.len());
            }
            ExportOutcome::NoData => info!("{} export: no data to export", format),
        }
    }

    Ok(())
}

fn log_summary(context: &TelemetryContext) {
    let snapshot = context.snapshot();
    let stats = &snapshot.stats;
    info!(
        "Threats: {} shown / {} total, {} blocked, {} critical, success rate {}%",
        stats.total, snapshot.total_events, stats.blocked, stats.critical, stats.success_rate
    );
    if let Some((country, count)) = snapshot.country_chart.first() {
        info!("Top origin: {} ({})", country, count);
    }
    let severities = stats
        .by_severity
        .series()
        .iter()
        .map(|(s, c)| format!("{}={}", s, c))
        .collect::<Vec<_>>()
        .join(" ");
    info!("Severity: {}", severities);
}
