// Threat Telemetry - Statistics Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Rolling windows, filtering and aggregation.

pub mod aggregate;
pub mod filter;
pub mod models;
mod window;

pub use aggregate::{compute, success_rate};
pub use filter::{Criterion, FilterCriteria};
pub use models::{AggregateStats, GroupedCounts, SeverityCounts, TimeSeriesSample, COUNTRY_CHART_LIMIT};
pub use window::{RollingWindow, WindowOrder};
