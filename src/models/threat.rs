// Threat Telemetry - Threat Event Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Threat events and the fixed tables they are drawn from.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// An origin country with its map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Country {
    pub name: &'static str,
    pub code: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// Fixed table of countries events originate from.
pub const COUNTRIES: [Country; 10] = [
    Country { name: "USA", code: "US", lat: 37.0902, lng: -95.7129 },
    Country { name: "China", code: "CN", lat: 35.8617, lng: 104.1954 },
    Country { name: "Russia", code: "RU", lat: 61.5240, lng: 105.3188 },
    Country { name: "Germany", code: "DE", lat: 51.1657, lng: 10.4515 },
    Country { name: "Brazil", code: "BR", lat: -14.2350, lng: -51.9253 },
    Country { name: "India", code: "IN", lat: 20.5937, lng: 78.9629 },
    Country { name: "UK", code: "GB", lat: 55.3781, lng: -3.4360 },
    Country { name: "France", code: "FR", lat: 46.2276, lng: 2.2137 },
    Country { name: "Japan", code: "JP", lat: 36.2048, lng: 138.2529 },
    Country { name: "Australia", code: "AU", lat: -25.2744, lng: 133.7751 },
];

impl Country {
    /// Look up a country by its exact display name.
    pub fn by_name(name: &str) -> Option<&'static Country> {
        COUNTRIES.iter().find(|c| c.name == name)
    }
}

/// Attack category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackType {
    #[serde(rename = "DDoS")]
    Ddos,
    Malware,
    Phishing,
    #[serde(rename = "SQL Injection")]
    SqlInjection,
    Ransomware,
    #[serde(rename = "Zero-Day")]
    ZeroDay,
    #[serde(rename = "Brute Force")]
    BruteForce,
    #[serde(rename = "XSS")]
    Xss,
    #[serde(rename = "Man-in-the-Middle")]
    ManInTheMiddle,
    Trojan,
    Worm,
    Spyware,
}

impl AttackType {
    pub const ALL: [AttackType; 12] = [
        Self::Ddos,
        Self::Malware,
        Self::Phishing,
        Self::SqlInjection,
        Self::Ransomware,
        Self::ZeroDay,
        Self::BruteForce,
        Self::Xss,
        Self::ManInTheMiddle,
        Self::Trojan,
        Self::Worm,
        Self::Spyware,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ddos => "DDoS",
            Self::Malware => "Malware",
            Self::Phishing => "Phishing",
            Self::SqlInjection => "SQL Injection",
            Self::Ransomware => "Ransomware",
            Self::ZeroDay => "Zero-Day",
            Self::BruteForce => "Brute Force",
            Self::Xss => "XSS",
            Self::ManInTheMiddle => "Man-in-the-Middle",
            Self::Trojan => "Trojan",
            Self::Worm => "Worm",
            Self::Spyware => "Spyware",
        }
    }
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttackType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| anyhow!("Unknown attack type: {}", s))
    }
}

/// Four-level risk classification, ordered `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|sev| sev.as_str() == s)
            .ok_or_else(|| anyhow!("Unknown severity: {}", s))
    }
}

/// Unique event identifier: epoch milliseconds scaled by 1000 plus a random tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreatId(pub u64);

impl fmt::Display for ThreatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single synthetic threat observation.
///
/// Field order is significant: exports derive their column order from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatEvent {
    pub id: ThreatId,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub attack_type: AttackType,
    pub ip: String,
    pub severity: Severity,
    /// Local wall-clock time, e.g. `3:04:05 PM`.
    pub timestamp: String,
    pub blocked: bool,
}

impl ThreatEvent {
    /// Build an event originating from one of the known countries.
    pub fn new(
        id: ThreatId,
        origin: &Country,
        attack_type: AttackType,
        ip: String,
        severity: Severity,
        timestamp: String,
        blocked: bool,
    ) -> Self {
        Self {
            id,
            country: origin.name.to_string(),
            lat: origin.lat,
            lng: origin.lng,
            attack_type,
            ip,
            severity,
            timestamp,
            blocked,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}
