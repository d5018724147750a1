// Threat Telemetry - Scan Client Tests
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::json;
use threat_telemetry::models::fallback_networks;
use threat_telemetry::network::{
    NetworkScanClient, NoToken, ScanSource, ScanState, ScanTimings, StaticToken, TokenSource,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SCAN_PATH: &str = "/api/network/scan";

fn timings() -> ScanTimings {
    ScanTimings {
        timeout: Duration::from_millis(400),
        fallback_delay: Duration::from_millis(100),
        settle_delay: Duration::from_millis(100),
    }
}

fn client(server: &MockServer, tokens: Arc<dyn TokenSource>) -> NetworkScanClient {
    NetworkScanClient::new(format!("{}{}", server.uri(), SCAN_PATH), tokens, timings()).unwrap()
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(SCAN_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

fn live_networks() -> serde_json::Value {
    json!([
        {"ssid": "Lab_5G", "signal": 81, "security": "WPA3", "distance": 4, "channel": 44, "speed": "1200 Mbps"},
        {"ssid": "Lab_Guest", "signal": 52.5, "security": "Open", "distance": 18.2, "channel": 6, "speed": "150 Mbps"}
    ])
}

#[tokio::test]
async fn live_result_is_published_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SCAN_PATH))
        .and(header("authorization", "Bearer s3cret"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(live_networks()))
        .mount(&server)
        .await;

    let client = client(&server, Arc::new(StaticToken::new("s3cret")));
    let outcome = client.scan().await;

    assert_eq!(outcome.source, ScanSource::Live);
    assert_eq!(outcome.networks.len(), 2);
    assert_eq!(outcome.networks[1].ssid, "Lab_Guest");
    assert_eq!(client.networks(), outcome.networks);
    assert_eq!(client.state(), ScanState::Idle);
    assert!(!client.is_busy());
}

#[tokio::test]
async fn authorization_header_is_omitted_without_token() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_json(live_networks())).await;

    let client = client(&server, Arc::new(NoToken));
    let outcome = client.scan().await;
    assert_eq!(outcome.source, ScanSource::Live);

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn error_status_falls_back() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(503)).await;

    let outcome = client(&server, Arc::new(NoToken)).scan().await;
    assert_eq!(outcome.source, ScanSource::Fallback);
    assert_eq!(outcome.networks, fallback_networks());
}

#[tokio::test]
async fn empty_list_falls_back() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_json(json!([]))).await;

    let outcome = client(&server, Arc::new(NoToken)).scan().await;
    assert_eq!(outcome.source, ScanSource::Fallback);
    assert_eq!(outcome.networks.len(), 9);
}

#[tokio::test]
async fn non_list_body_falls_back() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"networks": live_networks()})),
    )
    .await;

    let outcome = client(&server, Arc::new(NoToken)).scan().await;
    assert_eq!(outcome.source, ScanSource::Fallback);
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let outcome = client(&server, Arc::new(NoToken)).scan().await;
    assert_eq!(outcome.source, ScanSource::Fallback);
}

#[tokio::test]
async fn slow_backend_hits_deadline_and_falls_back() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(live_networks())
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let client = client(&server, Arc::new(NoToken));
    let started = Instant::now();
    let handle = client.start_scan();
    assert!(client.is_busy());

    let outcome = handle.await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(outcome.source, ScanSource::Fallback);
    assert_eq!(client.networks(), fallback_networks());
    assert!(!client.is_busy());
    assert_eq!(client.state(), ScanState::Idle);

    // Deadline plus the parallel fallback and settle delays, not the backend's 3s.
    let t = timings();
    let settled_by = t.timeout + t.fallback_delay.max(t.settle_delay);
    assert!(elapsed >= settled_by);
    assert!(
        elapsed <= settled_by + Duration::from_millis(250),
        "scan took {:?}",
        elapsed
    );
}

#[tokio::test]
async fn dropped_scan_still_settles() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(live_networks())
            .set_delay(Duration::from_secs(5)),
    )
    .await;

    let client = NetworkScanClient::new(
        format!("{}{}", server.uri(), SCAN_PATH),
        Arc::new(NoToken),
        ScanTimings {
            timeout: Duration::from_millis(300),
            fallback_delay: Duration::from_millis(10),
            settle_delay: Duration::from_millis(10),
        },
    )
    .unwrap();

    let abandoned = tokio::time::timeout(Duration::from_millis(50), client.scan()).await;
    assert!(abandoned.is_err());
    assert!(client.is_busy());

    tokio::time::sleep(Duration::from_millis(800)).await;
    assert!(!client.is_busy());
    assert_eq!(client.state(), ScanState::Idle);
    assert_eq!(client.networks(), fallback_networks());
}

#[tokio::test]
async fn busy_clears_before_a_slower_fallback_publishes() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(500)).await;

    let client = NetworkScanClient::new(
        format!("{}{}", server.uri(), SCAN_PATH),
        Arc::new(NoToken),
        ScanTimings {
            timeout: Duration::from_millis(400),
            fallback_delay: Duration::from_millis(600),
            settle_delay: Duration::from_millis(50),
        },
    )
    .unwrap();

    let handle = client.start_scan();
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(!client.is_busy());
    assert_eq!(client.state(), ScanState::Idle);
    assert!(client.networks().is_empty());

    let outcome = handle.await.unwrap();
    assert_eq!(outcome.source, ScanSource::Fallback);
    assert_eq!(client.networks(), fallback_networks());
    assert_eq!(client.state(), ScanState::Idle);
}

#[tokio::test]
async fn fallback_state_is_visible_before_publication() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(500)).await;

    let client = client(&server, Arc::new(NoToken));
    let handle = client.start_scan();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(client.state(), ScanState::Fallback);
    assert!(client.networks().is_empty());
    assert!(client.is_busy());

    handle.await.unwrap();
    assert_eq!(client.networks().len(), 9);
    assert!(!client.is_busy());
}

#[tokio::test]
async fn overlapping_scans_are_allowed() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_json(live_networks())).await;

    let client = client(&server, Arc::new(NoToken));
    let first = client.start_scan();
    let second = client.start_scan();

    let (a, b) = (first.await.unwrap(), second.await.unwrap());
    assert_eq!(a.source, ScanSource::Live);
    assert_eq!(b.source, ScanSource::Live);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
    assert!(!client.is_busy());
}
