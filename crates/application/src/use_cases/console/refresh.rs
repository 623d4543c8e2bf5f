use crate::ports::BackendClient;
use crate::services::{group_latencies_by_resolver, sort_cache_entries, sort_hit_entries};
use crate::session::ConsoleSession;
use chrono::Utc;
use dns_console_domain::{ConsoleViewModel, DomainError};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Re-synchronizes every console section from the server.
///
/// Fetches run one after another on the same credential: filter, cache,
/// instrumentation, allow-list, overrides, auto-update. The first failure
/// stops the sequence, and a rejected credential is cleared from the session
/// before the error is returned.
pub struct RefreshConsoleUseCase {
    client: Arc<dyn BackendClient>,
    session: Arc<ConsoleSession>,
}

impl RefreshConsoleUseCase {
    pub fn new(client: Arc<dyn BackendClient>, session: Arc<ConsoleSession>) -> Self {
        Self { client, session }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<ConsoleViewModel, DomainError> {
        let credential = self.session.credential()?;
        let session = &self.session;

        let filter = session.observe(self.client.fetch_filter(&credential).await)?;
        debug!(
            size = filter.size,
            hits = filter.hit_map.len(),
            created_at = %filter.created_at,
            "Fetched filter snapshot"
        );

        let cache = session.observe(self.client.fetch_cache(&credential).await)?;
        debug!(entries = cache.len(), "Fetched cache");

        let instrumentation =
            session.observe(self.client.fetch_instrumentation(&credential).await)?;
        debug!(records = instrumentation.len(), "Fetched instrumentation log");

        let allow_list = session.observe(self.client.fetch_allow_list(&credential).await)?;
        let overrides = session.observe(self.client.fetch_overrides(&credential).await)?;
        let auto_update = session.observe(self.client.fetch_auto_update(&credential).await)?;

        let sort = session.sort_state();
        let view = ConsoleViewModel {
            filter_created_at: filter.created_at,
            filter_size: filter.size,
            hits: sort_hit_entries(&filter, sort.field, sort.direction),
            sort,
            cache: sort_cache_entries(cache),
            resolver_latencies: group_latencies_by_resolver(&instrumentation),
            allow_list,
            overrides,
            auto_update,
            as_of: Utc::now(),
        };

        session.record_created_at(filter.created_at);

        info!(
            hits = view.hits.len(),
            cache_entries = view.cache.len(),
            resolvers = view.resolver_latencies.len(),
            "Console refreshed"
        );

        Ok(view)
    }
}
