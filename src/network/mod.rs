// Threat Telemetry - Network Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! HTTP boundaries: network discovery and the assistant.
//!
//! Both clients fail soft. Callers always receive a usable result, either
//! live data or a canned substitute.

mod auth;
mod chat;
mod scan;

pub use auth::{EnvToken, NoToken, StaticToken, TokenSource, TOKEN_ENV_VAR};
pub use chat::{ChatClient, CHAT_FALLBACK_REPLY};
pub use scan::{NetworkScanClient, ScanOutcome, ScanSource, ScanState, ScanTimings};
