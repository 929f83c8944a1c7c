//! aws_ip_ranges library: cached, filterable view of the published AWS IP ranges
//!
//! A background refresher downloads `ip-ranges.json` at startup and then on a
//! fixed period, swapping a new immutable snapshot in on every successful fetch.
//! The HTTP server answers `GET /aws-ips?region=..&type=..` from whatever
//! snapshot is current and serves static assets for every other path.
//!
//! # Example
//!
//! ```no_run
//! use aws_ip_ranges::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 8080,
//!     ..Default::default()
//! };
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod query;
pub mod ranges;
pub mod server;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{QueryError, RefreshError};
pub use query::{AddressFamily, RangeQuery, RegionFilter};
pub use ranges::{RangeEntry, Refresher, Snapshot, SnapshotCache};
pub use run::run_server;

mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::info;
    use tokio_util::sync::CancellationToken;

    use crate::app::{cancel_on_ctrl_c, shutdown_gracefully};
    use crate::config::Config;
    use crate::initialization::init_client;
    use crate::ranges::{Refresher, SnapshotCache};
    use crate::server::{build_router, start_server, AppState};

    /// Runs the service until Ctrl-C.
    ///
    /// Starts with an empty snapshot, spawns the refresher (whose first cycle
    /// runs immediately) and serves HTTP on `config.socket_addr()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built, the listener cannot
    /// bind, or the server fails while running. Upstream failures are never
    /// returned; the refresher logs them and keeps the previous snapshot.
    pub async fn run_server(config: Config) -> Result<()> {
        let client =
            init_client(config.fetch_timeout()).context("Failed to initialize HTTP client")?;
        let cache = Arc::new(SnapshotCache::default());

        let cancel = CancellationToken::new();
        cancel_on_ctrl_c(cancel.clone());

        info!(
            "Refreshing {} every {}s",
            config.upstream_url, config.refresh_interval_secs
        );
        let refresher = Refresher::new(
            client,
            config.upstream_url.clone(),
            Arc::clone(&cache),
            config.refresh_interval(),
        );
        let refresher_task = refresher.spawn(cancel.child_token());

        let app = build_router(AppState { cache }, &config.public_dir);
        let served = start_server(config.socket_addr(), app, cancel.clone()).await;

        shutdown_gracefully(cancel, refresher_task).await;
        served
    }
}
