use dns_console_domain::{Credential, DomainError, SortField, SortState, Timestamp};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use tracing::{debug, warn};

/// Progress of the filter-update watcher, exposed so a renderer can disable
/// its trigger while a cycle runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateWatchState {
    #[default]
    Idle,
    Requested,
    Polling {
        polls: u32,
    },
}

/// Per-operator state shared by every use case of one console session.
///
/// Each field has a single writer at a time; locks only guard against a
/// multi-threaded runtime interleaving reads.
pub struct ConsoleSession {
    credential: RwLock<Option<Credential>>,
    sort: RwLock<SortState>,
    seen_created_at: RwLock<Option<Timestamp>>,
    update_in_flight: AtomicBool,
    update_state: RwLock<UpdateWatchState>,
}

impl ConsoleSession {
    pub fn new(sort: SortState) -> Self {
        Self {
            credential: RwLock::new(None),
            sort: RwLock::new(sort),
            seen_created_at: RwLock::new(None),
            update_in_flight: AtomicBool::new(false),
            update_state: RwLock::new(UpdateWatchState::Idle),
        }
    }

    pub fn with_credential(self, credential: Credential) -> Self {
        self.login(credential);
        self
    }

    pub fn login(&self, credential: Credential) {
        *self.credential.write().unwrap_or_else(|e| e.into_inner()) = Some(credential);
    }

    pub fn logout(&self) {
        *self.credential.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.credential
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    pub fn credential(&self) -> Result<Credential, DomainError> {
        self.credential
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .ok_or(DomainError::MissingCredential)
    }

    /// Passes `result` through, dropping the stored credential if the server
    /// rejected it.
    pub fn observe<T>(&self, result: Result<T, DomainError>) -> Result<T, DomainError> {
        if let Err(DomainError::Unauthorized) = &result {
            warn!("Credential rejected; clearing stored credential");
            self.logout();
        }
        result
    }

    pub fn sort_state(&self) -> SortState {
        *self.sort.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_sort_state(&self, sort: SortState) {
        *self.sort.write().unwrap_or_else(|e| e.into_inner()) = sort;
    }

    /// Column-header click on the hit table.
    pub fn toggle_sort(&self, field: SortField) -> SortState {
        let mut guard = self.sort.write().unwrap_or_else(|e| e.into_inner());
        guard.toggle(field);
        debug!(field = field.to_str(), direction = guard.direction.to_str(), "Sort toggled");
        *guard
    }

    pub fn seen_created_at(&self) -> Option<Timestamp> {
        *self.seen_created_at.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn record_created_at(&self, created_at: Timestamp) {
        *self.seen_created_at.write().unwrap_or_else(|e| e.into_inner()) = Some(created_at);
    }

    pub fn update_state(&self) -> UpdateWatchState {
        *self.update_state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn set_update_state(&self, state: UpdateWatchState) {
        *self.update_state.write().unwrap_or_else(|e| e.into_inner()) = state;
    }

    /// Claims the single update-watch slot. Fails if a cycle is already
    /// running; the slot is released when the guard drops.
    pub fn begin_update(&self) -> Result<UpdateGuard<'_>, DomainError> {
        if self
            .update_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(DomainError::UpdateInProgress);
        }
        self.set_update_state(UpdateWatchState::Requested);
        Ok(UpdateGuard { session: self })
    }
}

impl Default for ConsoleSession {
    fn default() -> Self {
        Self::new(SortState::default())
    }
}

pub struct UpdateGuard<'a> {
    session: &'a ConsoleSession,
}

impl UpdateGuard<'_> {
    pub fn set_state(&self, state: UpdateWatchState) {
        self.session.set_update_state(state);
    }
}

impl Drop for UpdateGuard<'_> {
    fn drop(&mut self) {
        self.session.set_update_state(UpdateWatchState::Idle);
        self.session.update_in_flight.store(false, Ordering::Release);
    }
}
