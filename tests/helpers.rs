// Shared test helpers: fixture snapshots, upstream documents and router requests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use aws_ip_ranges::server::{build_router, AppState};
use aws_ip_ranges::{RangeEntry, Snapshot, SnapshotCache};

/// The three-entry snapshot used across the query tests.
#[allow(dead_code)]
pub fn fixture_snapshot() -> Snapshot {
    Snapshot::new(vec![
        RangeEntry::ipv4("10.0.0.0/8", "us-east-1"),
        RangeEntry::ipv6("2600::/24", "us-east-1"),
        RangeEntry::ipv4("10.1.0.0/16", "eu-west-1"),
    ])
}

/// An upstream document in the published format.
/// The IPv6 array comes first in the JSON to check that ordering follows the fields, not the text.
#[allow(dead_code)]
pub const UPSTREAM_DOCUMENT: &str = r#"{
  "syncToken": "1729300000",
  "createDate": "2024-10-19-01-06-40",
  "ipv6_prefixes": [
    {"ipv6_prefix": "2600:1f18::/33", "region": "us-east-1", "service": "EC2", "network_border_group": "us-east-1"},
    {"ipv6_prefix": "2a05:d018::/36", "region": "eu-west-1", "service": "EC2", "network_border_group": "eu-west-1"}
  ],
  "prefixes": [
    {"ip_prefix": "3.2.34.0/26", "region": "af-south-1", "service": "AMAZON", "network_border_group": "af-south-1"},
    {"ip_prefix": "52.94.76.0/22", "region": "us-east-1", "service": "AMAZON", "network_border_group": "us-east-1"},
    {"ip_prefix": "18.200.0.0/16", "region": "eu-west-1", "service": "EC2", "network_border_group": "eu-west-1"}
  ]
}"#;

/// Router over a cache seeded with `snapshot`, serving static files from a fresh temp dir.
#[allow(dead_code)]
pub fn test_app(snapshot: Snapshot) -> (Router, Arc<SnapshotCache>, TempDir) {
    let public_dir = TempDir::new().expect("Failed to create temp public dir");
    let cache = Arc::new(SnapshotCache::new(snapshot));
    let app = build_router(
        AppState {
            cache: Arc::clone(&cache),
        },
        public_dir.path(),
    );
    (app, cache, public_dir)
}

/// Sends a GET through the router and returns the status and raw body.
#[allow(dead_code)]
pub async fn get_raw(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router should not fail");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, body.to_vec())
}

/// Sends a GET through the router and parses the body as JSON.
#[allow(dead_code)]
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_raw(app, uri).await;
    let json = serde_json::from_slice(&body).expect("Body should be JSON");
    (status, json)
}
