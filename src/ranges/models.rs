//! Range data structures.
//!
//! `UpstreamDocument` mirrors the published JSON; `Snapshot` is the flattened,
//! immutable form the query side reads.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::query::AddressFamily;

/// The published `ip-ranges.json` document.
///
/// Only the two prefix arrays are required; a document missing either one is
/// rejected as malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamDocument {
    #[serde(rename = "syncToken", default)]
    pub sync_token: Option<String>,
    #[serde(rename = "createDate", default)]
    pub create_date: Option<String>,
    pub prefixes: Vec<Ipv4Record>,
    pub ipv6_prefixes: Vec<Ipv6Record>,
}

/// One element of `prefixes`
#[derive(Debug, Clone, Deserialize)]
pub struct Ipv4Record {
    pub ip_prefix: String,
    pub region: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

/// One element of `ipv6_prefixes`
#[derive(Debug, Clone, Deserialize)]
pub struct Ipv6Record {
    pub ipv6_prefix: String,
    pub region: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

/// CIDR prefix of a range entry, tagged with its family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prefix {
    V4(String),
    V6(String),
}

impl Prefix {
    pub fn as_str(&self) -> &str {
        match self {
            Prefix::V4(p) | Prefix::V6(p) => p,
        }
    }

    pub fn family(&self) -> AddressFamily {
        match self {
            Prefix::V4(_) => AddressFamily::Ipv4,
            Prefix::V6(_) => AddressFamily::Ipv6,
        }
    }
}

/// One address range.
///
/// `metadata` holds the remaining upstream fields (`service`,
/// `network_border_group`, ...) untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeEntry {
    pub prefix: Prefix,
    pub region: String,
    pub metadata: Map<String, Value>,
}

impl RangeEntry {
    pub fn ipv4(prefix: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            prefix: Prefix::V4(prefix.into()),
            region: region.into(),
            metadata: Map::new(),
        }
    }

    pub fn ipv6(prefix: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            prefix: Prefix::V6(prefix.into()),
            region: region.into(),
            metadata: Map::new(),
        }
    }
}

impl From<Ipv4Record> for RangeEntry {
    fn from(record: Ipv4Record) -> Self {
        Self {
            prefix: Prefix::V4(record.ip_prefix),
            region: record.region,
            metadata: record.metadata,
        }
    }
}

impl From<Ipv6Record> for RangeEntry {
    fn from(record: Ipv6Record) -> Self {
        Self {
            prefix: Prefix::V6(record.ipv6_prefix),
            region: record.region,
            metadata: record.metadata,
        }
    }
}

/// Provenance of a snapshot, as reported by the upstream document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotMetadata {
    pub sync_token: Option<String>,
    pub create_date: Option<String>,
}

/// Ordered, immutable set of ranges from one successful fetch.
///
/// IPv4 entries come first, then IPv6, each in upstream order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    entries: Vec<RangeEntry>,
    metadata: SnapshotMetadata,
}

impl Snapshot {
    pub fn new(entries: Vec<RangeEntry>) -> Self {
        Self {
            entries,
            metadata: SnapshotMetadata::default(),
        }
    }

    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }

    pub fn metadata(&self) -> &SnapshotMetadata {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<UpstreamDocument> for Snapshot {
    fn from(doc: UpstreamDocument) -> Self {
        let entries = doc
            .prefixes
            .into_iter()
            .map(RangeEntry::from)
            .chain(doc.ipv6_prefixes.into_iter().map(RangeEntry::from))
            .collect();
        Self {
            entries,
            metadata: SnapshotMetadata {
                sync_token: doc.sync_token,
                create_date: doc.create_date,
            },
        }
    }
}
