// Threat Telemetry - Generators
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Synthetic telemetry sources.
//!
//! Each generator owns its random number generator and never fails. The
//! pipeline drives them on independent clocks:
//!
//! ```text
//! EventGenerator   (2s) → event log + sample window
//! PredictionStream (5s) → prediction list + prediction chart
//! AttackMapFeed    (2s) → map arcs + counters
//! ```

mod arcs;
mod events;
mod predictions;

pub use arcs::AttackMapFeed;
pub use events::EventGenerator;
pub use predictions::PredictionStream;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// A deterministic generator for a fixed seed, otherwise one seeded from the OS.
pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
