// Threat Telemetry - Network Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Nearby wireless network records.

use serde::{Deserialize, Serialize};

/// A wireless network reported by a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkRecord {
    pub ssid: String,
    /// Signal strength percentage.
    pub signal: f64,
    /// Security protocol label, e.g. `WPA2` or `Open`.
    pub security: String,
    /// Estimated distance in meters.
    pub distance: f64,
    pub channel: u16,
    /// Link speed label, e.g. `867 Mbps`.
    pub speed: String,
}

impl NetworkRecord {
    fn canned(ssid: &str, signal: f64, security: &str, distance: f64, channel: u16, speed: &str) -> Self {
        Self {
            ssid: ssid.to_string(),
            signal,
            security: security.to_string(),
            distance,
            channel,
            speed: speed.to_string(),
        }
    }

    /// Whether the network uses no encryption.
    pub fn is_open(&self) -> bool {
        self.security == "Open"
    }
}

/// Canned networks published when a live scan is unavailable.
pub fn fallback_networks() -> Vec<NetworkRecord> {
    vec![
        NetworkRecord::canned("Home_WiFi_5G", 95.0, "WPA2", 5.0, 36, "867 Mbps"),
        NetworkRecord::canned("Home_WiFi_2.4G", 90.0, "WPA2", 10.0, 1, "600 Mbps"),
        NetworkRecord::canned("Office_Network", 88.0, "WPA3", 12.0, 1, "600 Mbps"),
        NetworkRecord::canned("CoffeeShop_Guest", 68.0, "Open", 35.0, 11, "150 Mbps"),
        NetworkRecord::canned("Public_Library", 72.0, "Open", 45.0, 6, "300 Mbps"),
        NetworkRecord::canned("Secure_Corp_5G", 85.0, "WPA3-Ent", 15.0, 48, "1200 Mbps"),
        NetworkRecord::canned("Neighbor_WiFi", 45.0, "WPA2", 25.0, 11, "144 Mbps"),
        NetworkRecord::canned("City_Free_WiFi", 60.0, "Open", 60.0, 1, "54 Mbps"),
        NetworkRecord::canned("Unknown_Device", 30.0, "WEP", 80.0, 9, "11 Mbps"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_table_shape() {
        let table = fallback_networks();
        assert_eq!(table.len(), 9);
        assert_eq!(table[0].ssid, "Home_WiFi_5G");
        assert_eq!(table[8].security, "WEP");
        assert_eq!(table.iter().filter(|n| n.is_open()).count(), 3);
    }

    #[test]
    fn test_decodes_backend_payload() {
        let body = r#"[{"ssid":"Lab","signal":77,"security":"WPA2","distance":3.5,"channel":6,"speed":"300 Mbps"}]"#;
        let records: Vec<NetworkRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].signal, 77.0);
        assert_eq!(records[0].channel, 6);
    }
}
