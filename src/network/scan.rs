// Threat Telemetry - Network Scan Client
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Time-bounded discovery of nearby wireless networks.
//!
//! ```text
//! Idle → Scanning → Success  ─┐
//!                 → Fallback ─┴→ Idle
//! ```
//!
//! A scan never fails from the caller's point of view. Timeouts, transport
//! errors, error statuses and unusable bodies all end in the canned fallback
//! table, published after a short delay so the "scanning" state stays visible.
//!
//! The settle timer starts when the live attempt ends and runs alongside the
//! fallback delay, so busy may clear before the fallback table appears.
//!
//! Overlapping scans are not prevented. Each keeps its own timers, and the
//! first one to settle clears the busy flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::header::ACCEPT;
use tokio::task::JoinHandle;
use tokio::time::{sleep, sleep_until, timeout, Instant};
use tracing::{debug, info, warn};

use super::auth::{authorize, TokenSource};
use crate::models::{fallback_networks, NetworkRecord};

/// Scan lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Idle,
    Scanning,
    Success,
    Fallback,
}

/// Delays governing a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTimings {
    /// Hard deadline for the live request.
    pub timeout: Duration,
    /// Pause before the fallback table is published.
    pub fallback_delay: Duration,
    /// Pause after the live attempt ends before the busy flag clears.
    pub settle_delay: Duration,
}

impl Default for ScanTimings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(4),
            fallback_delay: Duration::from_secs(1),
            settle_delay: Duration::from_secs(1),
        }
    }
}

/// Where a published result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanSource {
    Live,
    Fallback,
}

/// The result a finished scan published.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    pub source: ScanSource,
    pub networks: Vec<NetworkRecord>,
}

#[derive(Debug, Default)]
struct ScanShared {
    state: ScanState,
    busy: bool,
    networks: Vec<NetworkRecord>,
    connected: Option<NetworkRecord>,
}

/// Client for the network scan endpoint.
#[derive(Clone)]
pub struct NetworkScanClient {
    http: reqwest::Client,
    endpoint: String,
    tokens: Arc<dyn TokenSource>,
    timings: ScanTimings,
    shared: Arc<Mutex<ScanShared>>,
}

impl NetworkScanClient {
    /// Create a client for `endpoint`.
    pub fn new(
        endpoint: impl Into<String>,
        tokens: Arc<dyn TokenSource>,
        timings: ScanTimings,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            tokens,
            timings,
            shared: Arc::new(Mutex::new(ScanShared::default())),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timings(&self) -> ScanTimings {
        self.timings
    }

    pub fn state(&self) -> ScanState {
        self.shared().state
    }

    /// Whether a scan is in progress.
    pub fn is_busy(&self) -> bool {
        self.shared().busy
    }

    /// The most recently published networks.
    pub fn networks(&self) -> Vec<NetworkRecord> {
        self.shared().networks.clone()
    }

    pub fn connected(&self) -> Option<NetworkRecord> {
        self.shared().connected.clone()
    }

    /// Start a scan in the background.
    ///
    /// The busy flag is set before this returns.
    pub fn start_scan(&self) -> JoinHandle<ScanOutcome> {
        let guard = self.begin();
        let client = self.clone();
        tokio::spawn(async move { client.run(guard).await })
    }

    /// Run a scan to completion, including the settle delay.
    ///
    /// The work runs in its own task, so dropping this future does not stop
    /// the scan from publishing a result and clearing busy.
    pub async fn scan(&self) -> ScanOutcome {
        match self.start_scan().await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Network scan task failed: {}", e);
                ScanOutcome {
                    source: ScanSource::Fallback,
                    networks: self.networks(),
                }
            }
        }
    }

    /// Mark the network named `ssid` from the current result as connected.
    ///
    /// Returns `None` if no such network was published.
    pub fn connect(&self, ssid: &str) -> Option<NetworkRecord> {
        let mut shared = self.shared();
        let network = shared.networks.iter().find(|n| n.ssid == ssid).cloned()?;
        info!("Connected to {}", network.ssid);
        shared.connected = Some(network.clone());
        Some(network)
    }

    pub fn disconnect(&self) {
        if let Some(previous) = self.shared().connected.take() {
            info!("Disconnected from {}", previous.ssid);
        }
    }

    fn shared(&self) -> MutexGuard<'_, ScanShared> {
        lock(&self.shared)
    }

    fn begin(&self) -> SettleGuard {
        let mut shared = self.shared();
        shared.busy = true;
        shared.state = ScanState::Scanning;
        SettleGuard::new(Arc::clone(&self.shared))
    }

    async fn run(&self, guard: SettleGuard) -> ScanOutcome {
        let attempt = timeout(self.timings.timeout, self.fetch_live()).await;
        let settle_at = Instant::now() + self.timings.settle_delay;
        let settle = async {
            sleep_until(settle_at).await;
            guard.settle();
        };

        match attempt {
            Ok(Ok(networks)) => {
                info!("Network scan found {} networks", networks.len());
                self.shared().state = ScanState::Success;
                self.publish(&networks);
                settle.await;
                ScanOutcome {
                    source: ScanSource::Live,
                    networks,
                }
            }
            Ok(Err(e)) => {
                warn!("Network scan failed, using fallback: {:#}", e);
                let (outcome, ()) = tokio::join!(self.fall_back(), settle);
                outcome
            }
            Err(_) => {
                warn!(
                    "Network scan timed out after {:?}, using fallback",
                    self.timings.timeout
                );
                let (outcome, ()) = tokio::join!(self.fall_back(), settle);
                outcome
            }
        }
    }

    async fn fall_back(&self) -> ScanOutcome {
        self.shared().state = ScanState::Fallback;
        sleep(self.timings.fallback_delay).await;

        let networks = fallback_networks();
        self.publish(&networks);
        ScanOutcome {
            source: ScanSource::Fallback,
            networks,
        }
    }

    fn publish(&self, networks: &[NetworkRecord]) {
        self.shared().networks = networks.to_vec();
    }

    async fn fetch_live(&self) -> Result<Vec<NetworkRecord>> {
        debug!("Scanning networks via {}", self.endpoint);

        let request = self.http.get(&self.endpoint).header(ACCEPT, "application/json");
        let response = authorize(request, self.tokens.as_ref())
            .send()
            .await
            .context("Scan request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Scan backend returned HTTP {}", status);
        }

        let networks: Vec<NetworkRecord> = response
            .json()
            .await
            .context("Scan response is not a list of networks")?;

        if networks.is_empty() {
            bail!("Scan backend returned no networks");
        }

        Ok(networks)
    }
}

fn lock(shared: &Mutex<ScanShared>) -> MutexGuard<'_, ScanShared> {
    match shared.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Clears busy once per scan: when its settle timer fires, or when the scan
/// is dropped before that.
struct SettleGuard {
    shared: Arc<Mutex<ScanShared>>,
    settled: AtomicBool,
}

impl SettleGuard {
    fn new(shared: Arc<Mutex<ScanShared>>) -> Self {
        Self {
            shared,
            settled: AtomicBool::new(false),
        }
    }

    fn settle(&self) {
        if !self.settled.swap(true, Ordering::SeqCst) {
            let mut shared = lock(&self.shared);
            shared.busy = false;
            shared.state = ScanState::Idle;
        }
    }
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        if !self.settled.load(Ordering::SeqCst) {
            debug!("Network scan dropped before settling");
        }
        self.settle();
    }
}
