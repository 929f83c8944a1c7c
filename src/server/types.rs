//! Server data structures.

use std::sync::Arc;

use crate::ranges::SnapshotCache;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<SnapshotCache>,
}
