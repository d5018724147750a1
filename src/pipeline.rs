// Threat Telemetry - Pipeline
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Periodic tasks that feed the aggregation context.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::AppSettings;
use crate::context::TelemetryContext;
use crate::generator::{AttackMapFeed, EventGenerator, PredictionStream};

/// Cadence of each periodic source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSchedule {
    pub events: Duration,
    pub predictions: Duration,
    /// `None` disables the map feed.
    pub map: Option<Duration>,
}

impl Default for PipelineSchedule {
    fn default() -> Self {
        Self {
            events: Duration::from_secs(2),
            predictions: Duration::from_secs(5),
            map: Some(Duration::from_secs(2)),
        }
    }
}

impl From<&AppSettings> for PipelineSchedule {
    fn from(settings: &AppSettings) -> Self {
        Self {
            events: settings.event_interval(),
            predictions: settings.prediction_interval(),
            map: settings.enable_map_feed.then(|| settings.map_interval()),
        }
    }
}

/// Running periodic tasks. Dropping the handle leaves them running.
#[derive(Debug)]
pub struct PipelineHandle {
    tasks: Vec<JoinHandle<()>>,
}

impl PipelineHandle {
    /// Number of running sources.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Stop every task and wait for them to finish.
    pub async fn shutdown(self) {
        for task in &self.tasks {
            task.abort();
        }
        for task in self.tasks {
            let _ = task.await;
        }
        info!("Pipeline stopped");
    }
}

/// Spawns the generators on independent clocks.
pub struct Pipeline;

impl Pipeline {
    /// Start one task per source. Each first fires one period after start.
    ///
    /// Seeds derived from `seed` keep the sources independent but reproducible.
    pub fn spawn(context: &TelemetryContext, schedule: PipelineSchedule, seed: Option<u64>) -> PipelineHandle {
        let mut tasks = Vec::with_capacity(3);

        let mut events = EventGenerator::new(seed);
        tasks.push(spawn_periodic(schedule.events, context.clone(), move |ctx| {
            let (event, sample) = events.tick(ctx.is_secured());
            debug!("Threat {} from {} ({})", event.attack_type, event.country, event.severity);
            ctx.record_threat(event, sample);
        }));

        let mut predictions = PredictionStream::new(seed.map(|s| s.wrapping_add(1)));
        tasks.push(spawn_periodic(schedule.predictions, context.clone(), move |ctx| {
            let (record, point) = predictions.tick();
            debug!("Predicted {} against {}", record.attack_type, record.target_region);
            ctx.record_prediction(record, point);
        }));

        if let Some(period) = schedule.map {
            let mut feed = AttackMapFeed::new(seed.map(|s| s.wrapping_add(2)));
            tasks.push(spawn_periodic(period, context.clone(), move |ctx| {
                let (arc, rate) = feed.tick();
                ctx.record_arc(arc, rate);
            }));
        }

        info!(
            "Pipeline started: events every {:?}, predictions every {:?}, map {}",
            schedule.events,
            schedule.predictions,
            schedule.map.map_or("disabled".to_string(), |p| format!("every {:?}", p))
        );

        PipelineHandle { tasks }
    }
}

/// Shortest accepted period. `interval_at` panics on zero.
const MIN_PERIOD: Duration = Duration::from_millis(1);

fn spawn_periodic<F>(period: Duration, context: TelemetryContext, mut tick: F) -> JoinHandle<()>
where
    F: FnMut(&TelemetryContext) + Send + 'static,
{
    let period = period.max(MIN_PERIOD);
    tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            tick(&context);
        }
    })
}
