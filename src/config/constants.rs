//! Configuration constants.
//!
//! This module defines the defaults used when no CLI flag or environment
//! variable overrides them, plus the fixed strings of the HTTP surface.

use std::time::Duration;

/// Published AWS IP ranges document
pub const AWS_IP_RANGES_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";

/// Default listening port when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;
/// Default bind address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Directory served for every path that is not an API route
pub const DEFAULT_PUBLIC_DIR: &str = "public";

// Refresh timing
/// Seconds between two refreshes of the snapshot (one hour)
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60 * 60;
/// Upper bound for one upstream fetch, in seconds
/// The document is a few MB, 30s leaves room for slow links
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
/// Same default as a `Duration`, for callers that build their own client
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS);

/// User-Agent sent to the upstream provider
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// HTTP surface
/// Route serving the filtered prefix list
pub const IP_RANGES_ROUTE: &str = "/aws-ips";
/// Body of the 400 response for an unknown `type` filter
pub const INVALID_TYPE_MESSAGE: &str = "Invalid type filter. Use 'ipv4' or 'ipv6'.";
