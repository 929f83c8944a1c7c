//! AWS IP range data: upstream model, shared snapshot and refresher.
//!
//! This module handles:
//! - Parsing the published `ip-ranges.json` document
//! - Holding the current snapshot behind an atomic swap
//! - Refreshing the snapshot on a fixed period

mod cache;
mod fetch;
mod models;
mod refresher;

pub use cache::SnapshotCache;
pub use models::{
    Ipv4Record, Ipv6Record, Prefix, RangeEntry, Snapshot, SnapshotMetadata, UpstreamDocument,
};
pub use refresher::Refresher;
