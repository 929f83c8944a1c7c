//! Periodic snapshot refresh.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::error_handling::RefreshError;
use crate::ranges::cache::SnapshotCache;
use crate::ranges::fetch::fetch_snapshot;

/// Keeps a `SnapshotCache` in sync with the upstream document.
///
/// `refresh()` runs one cycle on demand; `spawn()` runs it at startup and then
/// once per `interval` until cancelled.
#[derive(Debug, Clone)]
pub struct Refresher {
    client: Arc<reqwest::Client>,
    url: String,
    cache: Arc<SnapshotCache>,
    interval: Duration,
}

impl Refresher {
    pub fn new(
        client: Arc<reqwest::Client>,
        url: impl Into<String>,
        cache: Arc<SnapshotCache>,
        interval: Duration,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            cache,
            interval,
        }
    }

    /// Fetches the upstream document and swaps it in.
    ///
    /// Returns the number of entries installed. On error the cache is untouched.
    pub async fn refresh(&self) -> Result<usize, RefreshError> {
        let snapshot = fetch_snapshot(&self.client, &self.url).await?;
        let count = snapshot.len();
        self.cache.replace(snapshot);
        Ok(count)
    }

    /// One refresh cycle with its outcome logged. Errors stop here.
    pub async fn refresh_and_log(&self) {
        match self.refresh().await {
            Ok(count) => log::info!("Fetched {} AWS IP ranges.", count),
            Err(e) => log::error!("Failed to fetch AWS IP ranges: {}", e),
        }
    }

    /// Starts the refresh loop on the runtime.
    ///
    /// The first tick fires immediately, which is the startup fetch. A slow fetch
    /// pushes later ticks back rather than bunching them up.
    pub fn spawn(self, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        self.refresh_and_log().await;
                    }
                    _ = cancel.cancelled() => {
                        log::debug!("Refresher stopped");
                        break;
                    }
                }
            }
        })
    }
}
