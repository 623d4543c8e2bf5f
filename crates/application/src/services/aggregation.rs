//! Pure aggregation over raw server payloads. No I/O.

use dns_console_domain::{
    CacheEntry, FilterSnapshot, HitEntry, InstrumentationRecord, ResolverLatency, SortDirection,
    SortField,
};
use std::cmp::Ordering;
use std::collections::BTreeMap;

const NANOS_PER_MILLI: f64 = 1_000_000.0;

#[derive(Default)]
struct LatencyAccumulator {
    samples: u64,
    total_nanos: i128,
}

/// Mean upstream latency per resolver.
///
/// Unattributed records (`resolver == None`) are skipped entirely. Negative
/// latencies from inconsistent timestamps are averaged in as-is. Summation is
/// exact integer arithmetic, so input order never changes the result.
pub fn group_latencies_by_resolver(
    records: &[InstrumentationRecord],
) -> BTreeMap<String, ResolverLatency> {
    let mut grouped: BTreeMap<&str, LatencyAccumulator> = BTreeMap::new();

    for record in records {
        let Some(resolver) = record.resolver.as_deref() else {
            continue;
        };
        let acc = grouped.entry(resolver).or_default();
        acc.samples += 1;
        acc.total_nanos += record.latency_nanos();
    }

    grouped
        .into_iter()
        .map(|(resolver, acc)| {
            let mean_nanos = acc.total_nanos as f64 / acc.samples as f64;
            (
                resolver.to_string(),
                ResolverLatency {
                    sample_count: acc.samples,
                    average_latency_ms: mean_nanos / NANOS_PER_MILLI,
                },
            )
        })
        .collect()
}

/// Hit rows ordered by `field` in `direction`. Equal keys keep map order.
pub fn sort_hit_entries(
    snapshot: &FilterSnapshot,
    field: SortField,
    direction: SortDirection,
) -> Vec<HitEntry> {
    order_hit_entries(snapshot.hit_entries(), field, direction)
}

/// Stable sort of already-flattened rows; ties stay in input order.
pub fn order_hit_entries(
    mut entries: Vec<HitEntry>,
    field: SortField,
    direction: SortDirection,
) -> Vec<HitEntry> {
    let compare = |a: &HitEntry, b: &HitEntry| -> Ordering {
        match field {
            SortField::Count => a.count.cmp(&b.count),
            SortField::UpdatedAt => a.last_updated.cmp(&b.last_updated),
        }
    };

    match direction {
        SortDirection::Asc => entries.sort_by(compare),
        SortDirection::Desc => entries.sort_by(|a, b| compare(b, a)),
    }
    entries
}

/// Cache rows soonest-expiring first. Not affected by the hit-table sort.
pub fn sort_cache_entries(mut entries: Vec<CacheEntry>) -> Vec<CacheEntry> {
    entries.sort_by(|a, b| a.valid_until.cmp(&b.valid_until));
    entries
}
