use crate::timestamp::Timestamp;
use std::collections::BTreeMap;

/// Observed hits for a single blocked name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitCounter {
    pub count: u64,
    pub last_updated: Timestamp,
}

/// Flattened row of the hit map, as presented to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitEntry {
    pub domain: String,
    pub count: u64,
    pub last_updated: Timestamp,
}

/// The server's filter state at fetch time.
///
/// `size` describes the server-side blocklist, `hit_map` only the names that
/// were actually queried, so the two are unrelated in cardinality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSnapshot {
    pub created_at: Timestamp,
    pub size: u64,
    pub hit_map: BTreeMap<String, HitCounter>,
}

impl FilterSnapshot {
    pub fn new(created_at: Timestamp, size: u64) -> Self {
        Self {
            created_at,
            size,
            hit_map: BTreeMap::new(),
        }
    }

    pub fn with_hit(mut self, domain: &str, count: u64, last_updated: Timestamp) -> Self {
        self.hit_map.insert(
            domain.to_string(),
            HitCounter {
                count,
                last_updated,
            },
        );
        self
    }

    /// Hit rows in map iteration order.
    pub fn hit_entries(&self) -> Vec<HitEntry> {
        self.hit_map
            .iter()
            .map(|(domain, counter)| HitEntry {
                domain: domain.clone(),
                count: counter.count,
                last_updated: counter.last_updated,
            })
            .collect()
    }
}
