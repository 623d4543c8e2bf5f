use crate::services::order_hit_entries;
use crate::session::ConsoleSession;
use dns_console_domain::{ConsoleViewModel, SortField};
use std::sync::Arc;

/// Re-orders the hit table of an existing view after a header click,
/// without going back to the server.
pub struct ResortConsoleUseCase {
    session: Arc<ConsoleSession>,
}

impl ResortConsoleUseCase {
    pub fn new(session: Arc<ConsoleSession>) -> Self {
        Self { session }
    }

    pub fn execute(&self, mut view: ConsoleViewModel, field: SortField) -> ConsoleViewModel {
        let sort = self.session.toggle_sort(field);

        // Domain order is the hit map's iteration order; restore it so ties
        // resolve exactly as they do on a fresh refresh.
        let mut hits = std::mem::take(&mut view.hits);
        hits.sort_by(|a, b| a.domain.cmp(&b.domain));

        view.hits = order_hit_entries(hits, sort.field, sort.direction);
        view.sort = sort;
        view
    }
}
