// Threat Telemetry - Configuration
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Pipeline settings management using a local JSON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::network::ScanTimings;

/// Pipeline settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Network scan endpoint.
    #[serde(default = "default_scan_url")]
    pub scan_url: String,
    /// Assistant endpoint.
    #[serde(default = "default_chat_url")]
    pub chat_url: String,
    /// Threat event cadence.
    #[serde(default = "default_event_interval")]
    pub event_interval_ms: u64,
    /// Prediction cadence.
    #[serde(default = "default_prediction_interval")]
    pub prediction_interval_ms: u64,
    /// Attack map cadence.
    #[serde(default = "default_map_interval")]
    pub map_interval_ms: u64,
    #[serde(default = "default_scan_timeout")]
    pub scan_timeout_ms: u64,
    #[serde(default = "default_fallback_delay")]
    pub fallback_delay_ms: u64,
    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u64,
    /// Whether the network starts in secured mode.
    #[serde(default)]
    pub start_secured: bool,
    /// Fixed seed for reproducible synthetic data.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Run the attack map feed.
    #[serde(default = "default_true")]
    pub enable_map_feed: bool,
}

fn default_scan_url() -> String { "http://localhost:8000/api/network/scan".to_string() }
fn default_chat_url() -> String { "http://localhost:8000/api/chat".to_string() }
fn default_event_interval() -> u64 { 2000 }
fn default_prediction_interval() -> u64 { 5000 }
fn default_map_interval() -> u64 { 2000 }
fn default_scan_timeout() -> u64 { 4000 }
fn default_fallback_delay() -> u64 { 1000 }
fn default_settle_delay() -> u64 { 1000 }
fn default_true() -> bool { true }

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            scan_url: default_scan_url(),
            chat_url: default_chat_url(),
            event_interval_ms: default_event_interval(),
            prediction_interval_ms: default_prediction_interval(),
            map_interval_ms: default_map_interval(),
            scan_timeout_ms: default_scan_timeout(),
            fallback_delay_ms: default_fallback_delay(),
            settle_delay_ms: default_settle_delay(),
            start_secured: false,
            rng_seed: None,
            enable_map_feed: true,
        }
    }
}

impl AppSettings {
    pub fn event_interval(&self) -> Duration {
        Duration::from_millis(self.event_interval_ms.max(1))
    }

    pub fn prediction_interval(&self) -> Duration {
        Duration::from_millis(self.prediction_interval_ms.max(1))
    }

    pub fn map_interval(&self) -> Duration {
        Duration::from_millis(self.map_interval_ms.max(1))
    }

    pub fn scan_timings(&self) -> ScanTimings {
        ScanTimings {
            timeout: Duration::from_millis(self.scan_timeout_ms),
            fallback_delay: Duration::from_millis(self.fallback_delay_ms),
            settle_delay: Duration::from_millis(self.settle_delay_ms),
        }
    }
}

/// Settings manager that persists to a JSON file.
#[derive(Debug)]
pub struct Settings {
    settings: AppSettings,
    path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Load settings from the user configuration directory.
    pub fn new() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("threat-telemetry")
            .join("settings.json");

        Self::load_from(path)
    }

    /// Load settings from `path`, falling back to defaults if it is missing or invalid.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let settings = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => {
                    match serde_json::from_str(&content) {
                        Ok(s) => s,
                        Err(e) => {
                            warn!("Failed to parse settings: {}", e);
                            AppSettings::default()
                        }
                    }
                }
                Err(e) => {
                    warn!("Failed to read settings: {}", e);
                    AppSettings::default()
                }
            }
        } else {
            AppSettings::default()
        };

        Self { settings, path }
    }

    /// Save settings to disk.
    pub fn save(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        match serde_json::to_string_pretty(&self.settings) {
            Ok(content) => {
                if let Err(e) = fs::write(&self.path, content) {
                    warn!("Failed to save settings: {}", e);
                }
            }
            Err(e) => {
                warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current values.
    pub fn values(&self) -> &AppSettings {
        &self.settings
    }

    /// Get the scan endpoint.
    pub fn scan_url(&self) -> &str {
        &self.settings.scan_url
    }

    /// Set the scan endpoint.
    pub fn set_scan_url(&mut self, url: &str) {
        self.settings.scan_url = url.to_string();
        self.save();
    }

    /// Get the assistant endpoint.
    pub fn chat_url(&self) -> &str {
        &self.settings.chat_url
    }

    /// Set the assistant endpoint.
    pub fn set_chat_url(&mut self, url: &str) {
        self.settings.chat_url = url.to_string();
        self.save();
    }

    /// Get whether the pipeline starts secured.
    pub fn start_secured(&self) -> bool {
        self.settings.start_secured
    }

    /// Set whether the pipeline starts secured.
    pub fn set_start_secured(&mut self, secured: bool) {
        self.settings.start_secured = secured;
        self.save();
    }

    /// Get the random seed.
    pub fn rng_seed(&self) -> Option<u64> {
        self.settings.rng_seed
    }

    /// Set the random seed.
    pub fn set_rng_seed(&mut self, seed: Option<u64>) {
        self.settings.rng_seed = seed;
        self.save();
    }
}
