//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::USER_AGENT;
use crate::error_handling::InitializationError;

/// Builds the client used for upstream fetches.
///
/// The timeout bounds a whole fetch (connect, headers and body), so a stalled
/// upstream only delays the refresh task until the next tick.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend cannot be set up.
pub fn init_client(timeout: Duration) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
