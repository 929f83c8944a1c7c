//! Filtering of the current snapshot.
//!
//! A `RangeQuery` is validated once from the raw request parameters and then
//! applied to whatever snapshot the caller loaded. Applying it never touches
//! shared state.

use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumString};

use crate::error_handling::QueryError;
use crate::ranges::{RangeEntry, Snapshot};

/// Address family selected by the `type` parameter.
///
/// Parsing is exact and case-sensitive: only `ipv4` and `ipv6` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

/// Region part of a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegionFilter {
    /// No region given
    #[default]
    Any,
    /// Exact, case-sensitive region match
    Exact(String),
    /// `region` sent more than once or in `region[]` form; no single region equals it
    NoMatch,
}

/// Validated filters of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeQuery {
    pub region: RegionFilter,
    pub family: Option<AddressFamily>,
}

fn parse_family(kind: Option<String>) -> Result<Option<AddressFamily>, QueryError> {
    match kind.filter(|k| !k.is_empty()) {
        Some(k) => AddressFamily::from_str(&k)
            .map(Some)
            .map_err(|_| QueryError::InvalidType(k)),
        None => Ok(None),
    }
}

impl RangeQuery {
    /// Builds a query from single-valued parameters.
    ///
    /// Empty strings count as absent, so `?region=&type=` behaves like no filter.
    ///
    /// # Errors
    ///
    /// `QueryError::InvalidType` if `type` is present and not `ipv4`/`ipv6`.
    pub fn from_params(region: Option<String>, kind: Option<String>) -> Result<Self, QueryError> {
        Ok(Self {
            region: match region.filter(|r| !r.is_empty()) {
                Some(r) => RegionFilter::Exact(r),
                None => RegionFilter::Any,
            },
            family: parse_family(kind)?,
        })
    }

    /// Builds a query from the decoded key/value pairs of a query string.
    ///
    /// A key may appear several times or in `key[]` form. Such a multi-valued
    /// `type` is never a valid family, and a multi-valued `region` matches no
    /// entry. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// `QueryError::InvalidType` if `type` is present and not exactly one of
    /// `ipv4`/`ipv6`.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, QueryError> {
        let mut kinds = Vec::new();
        let mut kind_is_list = false;
        let mut regions = Vec::new();
        let mut region_is_list = false;

        for (key, value) in pairs {
            match key.as_str() {
                "type" => kinds.push(value.as_str()),
                "type[]" => {
                    kind_is_list = true;
                    kinds.push(value.as_str());
                }
                "region" => regions.push(value.as_str()),
                "region[]" => {
                    region_is_list = true;
                    regions.push(value.as_str());
                }
                _ => {}
            }
        }

        let family = match kinds.as_slice() {
            [] => None,
            [kind] if !kind_is_list => parse_family(Some(kind.to_string()))?,
            _ => return Err(QueryError::InvalidType(kinds.join(","))),
        };
        let region = match regions.as_slice() {
            [] | [""] if !region_is_list => RegionFilter::Any,
            [region] if !region_is_list => RegionFilter::Exact(region.to_string()),
            _ => RegionFilter::NoMatch,
        };

        Ok(Self { region, family })
    }

    fn matches(&self, entry: &RangeEntry) -> bool {
        match &self.region {
            RegionFilter::Any => {}
            RegionFilter::Exact(region) if entry.region == *region => {}
            _ => return false,
        }
        if let Some(family) = self.family {
            if entry.prefix.family() != family {
                return false;
            }
        }
        true
    }

    /// Prefixes of the matching entries, in snapshot order.
    pub fn apply(&self, snapshot: &Snapshot) -> Vec<String> {
        snapshot
            .entries()
            .iter()
            .filter(|entry| self.matches(entry))
            .map(|entry| entry.prefix.as_str().to_string())
            .collect()
    }
}
