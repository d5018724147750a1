// Threat Telemetry - Library Root
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Real-time threat telemetry aggregation.
//!
//! ```text
//! EventGenerator → event log → filter → stats → observers
//! PredictionStream → prediction windows
//! AttackMapFeed → map arcs
//! ```
//!
//! All buffers live in a [`TelemetryContext`]; [`Pipeline`] drives the
//! generators on their own clocks. Exports and network scans run on demand.

pub mod config;
pub mod context;
pub mod export;
pub mod generator;
pub mod models;
pub mod network;
pub mod pipeline;
pub mod stats;

pub use config::{AppSettings, Settings};
pub use context::{DashboardSnapshot, MapView, TelemetryContext, TelemetryUpdate};
pub use export::{ExportArtifact, ExportFormat, ExportOutcome};
pub use pipeline::{Pipeline, PipelineHandle, PipelineSchedule};
