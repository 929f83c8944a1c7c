//! Shared snapshot container.
//!
//! One writer (the refresher) swaps whole snapshots in; any number of request
//! handlers read without locking.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::ranges::models::Snapshot;

/// Atomically swappable holder of the current snapshot.
///
/// Handed to both the refresher and the HTTP handlers as `Arc<SnapshotCache>`,
/// so tests can build one around a fixture.
#[derive(Debug)]
pub struct SnapshotCache {
    current: ArcSwap<Snapshot>,
}

impl SnapshotCache {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            current: ArcSwap::from_pointee(snapshot),
        }
    }

    /// Current snapshot. The returned `Arc` stays valid across later replacements.
    pub fn get(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    /// Replaces the snapshot in one pointer swap.
    pub fn replace(&self, snapshot: Snapshot) {
        self.current.store(Arc::new(snapshot));
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new(Snapshot::default())
    }
}
