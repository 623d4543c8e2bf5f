//! JSON shapes of the filtering service's management API.

use dns_console_domain::{
    AllowList, CacheEntry, DomainError, FilterSnapshot, HitCounter, InstrumentationRecord,
    OverrideAddress, OverrideMap, Timestamp,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct FilterResponse {
    pub created_at: Timestamp,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub statistics: StatisticsEnvelope,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatisticsEnvelope {
    #[serde(default)]
    pub data: HitTable,
}

#[derive(Debug, Default, Deserialize)]
pub struct HitTable {
    /// domain -> [count, last_updated]
    #[serde(default)]
    pub data: BTreeMap<String, (u64, Timestamp)>,
}

impl From<FilterResponse> for FilterSnapshot {
    fn from(value: FilterResponse) -> Self {
        let hit_map = value
            .statistics
            .data
            .data
            .into_iter()
            .map(|(domain, (count, last_updated))| {
                (
                    domain,
                    HitCounter {
                        count,
                        last_updated,
                    },
                )
            })
            .collect();

        FilterSnapshot {
            created_at: value.created_at,
            size: value.size,
            hit_map,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CacheResponse {
    pub data: CacheTable,
}

#[derive(Debug, Deserialize)]
pub struct CacheTable {
    #[serde(default)]
    pub data: Vec<WireCacheEntry>,
}

#[derive(Debug, Deserialize)]
pub struct WireCacheEntry {
    /// Seconds since the epoch
    pub valid_until: u64,
    pub message: WireMessage,
}

#[derive(Debug, Deserialize)]
pub struct WireMessage {
    pub name: String,
}

impl From<CacheResponse> for Vec<CacheEntry> {
    fn from(value: CacheResponse) -> Self {
        value
            .data
            .data
            .into_iter()
            .map(|entry| CacheEntry::new(entry.message.name, Timestamp::from_secs(entry.valid_until)))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct InstrumentationResponse {
    pub data: RingBufferPayload,
}

#[derive(Debug, Deserialize)]
pub struct RingBufferPayload {
    #[serde(default)]
    pub container: Vec<WireInstrumentation>,
}

#[derive(Debug, Deserialize)]
pub struct WireInstrumentation {
    pub resolver: Option<String>,
    #[serde(default)]
    pub request_sent: Option<Timestamp>,
    #[serde(default)]
    pub request_received: Option<Timestamp>,
}

impl From<InstrumentationResponse> for Vec<InstrumentationRecord> {
    fn from(value: InstrumentationResponse) -> Self {
        let total = value.data.container.len();
        let records: Vec<InstrumentationRecord> = value
            .data
            .container
            .into_iter()
            .filter_map(|entry| match (entry.request_sent, entry.request_received) {
                (Some(request_sent), Some(request_received)) => Some(InstrumentationRecord {
                    resolver: entry.resolver,
                    request_sent,
                    request_received,
                }),
                _ => None,
            })
            .collect();

        if records.len() < total {
            debug!(
                dropped = total - records.len(),
                "Instrumentation entries without both timestamps dropped"
            );
        }
        records
    }
}

pub fn allow_list_from_wire(domains: Vec<String>) -> AllowList {
    domains.into_iter().collect()
}

pub fn overrides_from_wire(raw: BTreeMap<String, Vec<u8>>) -> Result<OverrideMap, DomainError> {
    raw.into_iter()
        .map(|(domain, octets)| {
            OverrideAddress::from_octets(&octets)
                .map(|address| (domain.clone(), address))
                .map_err(|_| {
                    DomainError::Transport(format!(
                        "malformed override address for {}: {:?}",
                        domain, octets
                    ))
                })
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct DomainRequest<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct OverrideRequest<'a> {
    pub name: &'a str,
    pub address: [u8; 4],
}

#[derive(Debug, Serialize)]
pub struct EmptyRequest {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_payload_decodes_hit_tuples() {
        let payload = json!({
            "created_at": { "secs_since_epoch": 1_700_000_000u64, "nanos_since_epoch": 5 },
            "size": 91_234,
            "statistics": {
                "capacity": 500,
                "length": 1,
                "data": { "data": {
                    "ads.example.com": [4, { "secs_since_epoch": 1_700_000_100u64, "nanos_since_epoch": 0 }]
                } }
            }
        });

        let response: FilterResponse = serde_json::from_value(payload).unwrap();
        let snapshot = FilterSnapshot::from(response);

        assert_eq!(snapshot.created_at, Timestamp::new(1_700_000_000, 5));
        assert_eq!(snapshot.size, 91_234);
        let hit = snapshot.hit_map["ads.example.com"];
        assert_eq!(hit.count, 4);
        assert_eq!(hit.last_updated, Timestamp::from_secs(1_700_000_100));
    }

    #[test]
    fn test_filter_payload_without_statistics_has_no_hits() {
        let payload = json!({
            "created_at": { "secs_since_epoch": 1, "nanos_since_epoch": 0 },
            "size": 10
        });

        let snapshot = FilterSnapshot::from(serde_json::from_value::<FilterResponse>(payload).unwrap());
        assert!(snapshot.hit_map.is_empty());
    }

    #[test]
    fn test_instrumentation_keeps_null_resolver_drops_missing_timestamps() {
        let ts = json!({ "secs_since_epoch": 10, "nanos_since_epoch": 0 });
        let payload = json!({ "data": { "capacity": 100, "container": [
            { "resolver": "9.9.9.9:53", "initial": ts, "request_sent": ts, "request_received": ts },
            { "resolver": null, "initial": ts, "request_sent": ts, "request_received": ts },
            { "resolver": null, "initial": ts, "request_sent": null, "request_received": null }
        ] } });

        let response: InstrumentationResponse = serde_json::from_value(payload).unwrap();
        let records: Vec<InstrumentationRecord> = response.into();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].resolver.as_deref(), Some("9.9.9.9:53"));
        assert!(records[1].resolver.is_none());
    }

    #[test]
    fn test_overrides_require_four_octets() {
        let mut raw = BTreeMap::new();
        raw.insert("nas.lan".to_string(), vec![10, 0, 0, 2]);
        assert_eq!(
            overrides_from_wire(raw.clone()).unwrap()["nas.lan"],
            OverrideAddress([10, 0, 0, 2])
        );

        raw.insert("bad.lan".to_string(), vec![10, 0]);
        assert!(matches!(
            overrides_from_wire(raw),
            Err(DomainError::Transport(_))
        ));
    }
}
