pub mod aggregation;
pub mod failure_surface;

pub use aggregation::{
    group_latencies_by_resolver, order_hit_entries, sort_cache_entries, sort_hit_entries,
};
pub use failure_surface::{failure_surface, FailureSurface};
