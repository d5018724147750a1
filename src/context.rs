// Threat Telemetry - Aggregation Context
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! The session-owned store of every telemetry buffer.
//!
//! Generators write through the `record_*` methods; readers take copies or an
//! immutable [`DashboardSnapshot`]. Every mutation is announced on a
//! broadcast channel so observers can re-render at their own pace.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::Result;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::export::{self, ExportFormat, ExportOutcome};
use crate::models::{AttackArc, MapCounters, PredictionChartPoint, PredictionRecord, ThreatEvent};
use crate::stats::{self, filter, AggregateStats, FilterCriteria, RollingWindow, TimeSeriesSample, WindowOrder};

/// Chart samples retained.
pub const SAMPLE_WINDOW: usize = 20;
/// Prediction records retained.
pub const PREDICTION_WINDOW: usize = 10;
/// Prediction chart points retained.
pub const PREDICTION_CHART_WINDOW: usize = 6;
/// Map arcs retained.
pub const ARC_WINDOW: usize = 21;

/// Notifications sent after each mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryUpdate {
    ThreatRecorded(ThreatEvent),
    PredictionRecorded(PredictionRecord),
    ArcRecorded(AttackArc),
    EventsCleared,
    SecuredChanged(bool),
    FilterChanged(FilterCriteria),
}

/// Everything a dashboard renders, computed at one instant.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// Events passing the filter, newest first.
    pub events: Vec<ThreatEvent>,
    /// Size of the unfiltered log.
    pub total_events: usize,
    pub stats: AggregateStats,
    pub country_chart: Vec<(String, usize)>,
    pub samples: Vec<TimeSeriesSample>,
    pub predictions: Vec<PredictionRecord>,
    pub prediction_points: Vec<PredictionChartPoint>,
    pub criteria: FilterCriteria,
    pub secured: bool,
}

/// Arcs and counters for the attack map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub arcs: Vec<AttackArc>,
    pub counters: MapCounters,
}

#[derive(Debug)]
struct SessionState {
    events: RollingWindow<ThreatEvent>,
    samples: RollingWindow<TimeSeriesSample>,
    predictions: RollingWindow<PredictionRecord>,
    prediction_points: RollingWindow<PredictionChartPoint>,
    arcs: RollingWindow<AttackArc>,
    map: MapCounters,
    criteria: FilterCriteria,
    secured: bool,
}

impl SessionState {
    fn new(secured: bool) -> Self {
        Self {
            events: RollingWindow::unbounded(WindowOrder::NewestFirst),
            samples: RollingWindow::bounded(SAMPLE_WINDOW, WindowOrder::OldestFirst),
            predictions: RollingWindow::bounded(PREDICTION_WINDOW, WindowOrder::NewestFirst),
            prediction_points: RollingWindow::bounded(PREDICTION_CHART_WINDOW, WindowOrder::OldestFirst),
            arcs: RollingWindow::bounded(ARC_WINDOW, WindowOrder::OldestFirst),
            map: MapCounters::default(),
            criteria: FilterCriteria::default(),
            secured,
        }
    }

    fn filtered(&self) -> Vec<ThreatEvent> {
        filter::apply(self.events.iter(), &self.criteria)
    }
}

/// Aggregation context for one session. Clones share the same state.
#[derive(Debug, Clone)]
pub struct TelemetryContext {
    state: Arc<RwLock<SessionState>>,
    updates: broadcast::Sender<TelemetryUpdate>,
}

impl Default for TelemetryContext {
    fn default() -> Self {
        Self::new(false)
    }
}

impl TelemetryContext {
    /// Create an empty session.
    pub fn new(secured: bool) -> Self {
        let (updates, _) = broadcast::channel(64);
        Self {
            state: Arc::new(RwLock::new(SessionState::new(secured))),
            updates,
        }
    }

    /// Subscribe to mutation notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<TelemetryUpdate> {
        self.updates.subscribe()
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        match self.state.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        match self.state.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn notify(&self, update: TelemetryUpdate) {
        // No subscribers is fine.
        let _ = self.updates.send(update);
    }

    // Writers

    /// Prepend an event to the log and append its tick's chart sample.
    pub fn record_threat(&self, event: ThreatEvent, sample: TimeSeriesSample) {
        {
            let mut state = self.write();
            state.events.push(event.clone());
            state.samples.push(sample);
        }
        self.notify(TelemetryUpdate::ThreatRecorded(event));
    }

    /// Prepend a prediction and append its chart point.
    pub fn record_prediction(&self, record: PredictionRecord, point: PredictionChartPoint) {
        {
            let mut state = self.write();
            state.predictions.push(record.clone());
            state.prediction_points.push(point);
        }
        self.notify(TelemetryUpdate::PredictionRecorded(record));
    }

    /// Append a map arc, bump the running total and replace the rate.
    pub fn record_arc(&self, arc: AttackArc, rate: u32) {
        {
            let mut state = self.write();
            state.arcs.push(arc.clone());
            state.map.total += 1;
            state.map.rate = rate;
        }
        self.notify(TelemetryUpdate::ArcRecorded(arc));
    }

    /// Drop every event from the log. Chart and prediction windows are kept.
    pub fn clear_events(&self) {
        let cleared = {
            let mut state = self.write();
            let n = state.events.len();
            state.events.clear();
            n
        };
        info!("Cleared {} events", cleared);
        self.notify(TelemetryUpdate::EventsCleared);
    }

    /// Set secured mode. Only events generated afterwards are affected.
    pub fn set_secured(&self, secured: bool) {
        self.write().secured = secured;
        info!("Network {}", if secured { "secured" } else { "unsecured" });
        self.notify(TelemetryUpdate::SecuredChanged(secured));
    }

    /// Flip secured mode and return the new value.
    pub fn toggle_secured(&self) -> bool {
        let secured = {
            let mut state = self.write();
            state.secured = !state.secured;
            state.secured
        };
        info!("Network {}", if secured { "secured" } else { "unsecured" });
        self.notify(TelemetryUpdate::SecuredChanged(secured));
        secured
    }

    pub fn set_filter(&self, criteria: FilterCriteria) {
        debug!(
            "Filter set to country={} attack={} severity={}",
            criteria.country, criteria.attack_type, criteria.severity
        );
        self.write().criteria = criteria.clone();
        self.notify(TelemetryUpdate::FilterChanged(criteria));
    }

    // Readers

    pub fn is_secured(&self) -> bool {
        self.read().secured
    }

    pub fn filter(&self) -> FilterCriteria {
        self.read().criteria.clone()
    }

    pub fn event_count(&self) -> usize {
        self.read().events.len()
    }

    /// The full event log, newest first.
    pub fn events(&self) -> Vec<ThreatEvent> {
        self.read().events.to_vec()
    }

    /// Events passing the current filter, newest first.
    pub fn filtered_events(&self) -> Vec<ThreatEvent> {
        self.read().filtered()
    }

    /// Statistics over the filtered events.
    pub fn stats(&self) -> AggregateStats {
        stats::compute(&self.filtered_events())
    }

    /// Top countries among the filtered events.
    pub fn country_chart(&self) -> Vec<(String, usize)> {
        self.stats().country_chart()
    }

    /// Chart samples, oldest first.
    pub fn samples(&self) -> Vec<TimeSeriesSample> {
        self.read().samples.to_vec()
    }

    /// Predictions, newest first.
    pub fn predictions(&self) -> Vec<PredictionRecord> {
        self.read().predictions.to_vec()
    }

    /// Prediction chart points, oldest first.
    pub fn prediction_points(&self) -> Vec<PredictionChartPoint> {
        self.read().prediction_points.to_vec()
    }

    pub fn map_view(&self) -> MapView {
        let state = self.read();
        MapView {
            arcs: state.arcs.to_vec(),
            counters: state.map,
        }
    }

    /// Capture everything the dashboard shows under a single lock.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let state = self.read();
        let events = state.filtered();
        let stats = stats::compute(&events);
        let country_chart = stats.country_chart();

        DashboardSnapshot {
            events,
            total_events: state.events.len(),
            stats,
            country_chart,
            samples: state.samples.to_vec(),
            predictions: state.predictions.to_vec(),
            prediction_points: state.prediction_points.to_vec(),
            criteria: state.criteria.clone(),
            secured: state.secured,
        }
    }

    /// Export the full, unfiltered event log.
    pub fn export(&self, format: ExportFormat) -> Result<ExportOutcome> {
        let events = self.events();
        export::export(&events, format)
    }
}
