//! DNS Console Domain Layer
pub mod auto_update;
pub mod cache_entry;
pub mod config;
pub mod credential;
pub mod errors;
pub mod filter;
pub mod instrumentation;
pub mod lists;
pub mod sort;
pub mod timestamp;
pub mod view_model;

pub use auto_update::AutoUpdateConfig;
pub use cache_entry::CacheEntry;
pub use config::{CliOverrides, ConfigError, ConsoleConfig, LogFormat};
pub use credential::Credential;
pub use errors::DomainError;
pub use filter::{FilterSnapshot, HitCounter, HitEntry};
pub use instrumentation::{InstrumentationRecord, ResolverLatency};
pub use lists::{validate_domain_name, AllowList, OverrideAddress, OverrideMap};
pub use sort::{SortDirection, SortField, SortState};
pub use timestamp::Timestamp;
pub use view_model::ConsoleViewModel;
