use crate::{
    AllowList, AutoUpdateConfig, CacheEntry, HitEntry, OverrideMap, ResolverLatency, SortState,
    Timestamp,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Everything the renderer needs for one frame of the console.
#[derive(Debug, Clone)]
pub struct ConsoleViewModel {
    pub filter_created_at: Timestamp,
    pub filter_size: u64,
    /// Hit rows already ordered by `sort`.
    pub hits: Vec<HitEntry>,
    pub sort: SortState,
    /// Ascending by `valid_until`.
    pub cache: Vec<CacheEntry>,
    pub resolver_latencies: BTreeMap<String, ResolverLatency>,
    pub allow_list: AllowList,
    pub overrides: OverrideMap,
    pub auto_update: AutoUpdateConfig,
    pub as_of: DateTime<Utc>,
}
