use crate::timestamp::Timestamp;

/// One upstream round trip as logged by the resolver.
///
/// `resolver` is `None` when the answer was not attributed to an upstream
/// (blocked, cached or overridden); such records carry no latency information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentationRecord {
    pub resolver: Option<String>,
    pub request_sent: Timestamp,
    pub request_received: Timestamp,
}

impl InstrumentationRecord {
    pub fn new(resolver: Option<&str>, request_sent: Timestamp, request_received: Timestamp) -> Self {
        Self {
            resolver: resolver.map(str::to_string),
            request_sent,
            request_received,
        }
    }

    pub fn latency_nanos(&self) -> i128 {
        self.request_received.nanos_since(&self.request_sent)
    }
}

/// Per-resolver latency summary derived from one instrumentation batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverLatency {
    pub sample_count: u64,
    pub average_latency_ms: f64,
}
