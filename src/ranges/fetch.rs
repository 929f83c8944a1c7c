//! Upstream fetching.

use crate::error_handling::RefreshError;
use crate::ranges::models::{Snapshot, UpstreamDocument};

/// Fetches and parses the ranges document at `url`.
///
/// The whole body is parsed before a `Snapshot` is built, so any failure leaves
/// nothing half-constructed.
pub(crate) async fn fetch_snapshot(
    client: &reqwest::Client,
    url: &str,
) -> Result<Snapshot, RefreshError> {
    log::debug!("Fetching IP ranges from: {}", url);
    let response = client.get(url).send().await.map_err(RefreshError::Request)?;
    if !response.status().is_success() {
        return Err(RefreshError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let json_text = response.text().await.map_err(RefreshError::Body)?;
    let document: UpstreamDocument = serde_json::from_str(&json_text)?;

    if let (Some(token), Some(created)) = (&document.sync_token, &document.create_date) {
        log::debug!("Upstream syncToken {} created {}", token, created);
    }

    Ok(Snapshot::from(document))
}
