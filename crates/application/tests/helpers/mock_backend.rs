#![allow(dead_code)]

use async_trait::async_trait;
use dns_console_application::ports::BackendClient;
use dns_console_domain::{
    AllowList, AutoUpdateConfig, CacheEntry, Credential, DomainError, FilterSnapshot,
    InstrumentationRecord, OverrideAddress, OverrideMap, Timestamp,
};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    FetchFilter,
    TriggerRebuild,
    FetchCache,
    FetchInstrumentation,
    FetchAllowList,
    AddAllowed(String),
    RemoveAllowed(String),
    FetchOverrides,
    SetOverride(String, OverrideAddress),
    RemoveOverride(String),
    FetchAutoUpdate,
    SetAutoUpdate(AutoUpdateConfig),
}

impl BackendCall {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCall::FetchFilter => "fetch_filter",
            BackendCall::TriggerRebuild => "trigger_filter_rebuild",
            BackendCall::FetchCache => "fetch_cache",
            BackendCall::FetchInstrumentation => "fetch_instrumentation",
            BackendCall::FetchAllowList => "fetch_allow_list",
            BackendCall::AddAllowed(_) => "add_allowed_domain",
            BackendCall::RemoveAllowed(_) => "remove_allowed_domain",
            BackendCall::FetchOverrides => "fetch_overrides",
            BackendCall::SetOverride(_, _) => "set_override",
            BackendCall::RemoveOverride(_) => "remove_override",
            BackendCall::FetchAutoUpdate => "fetch_auto_update",
            BackendCall::SetAutoUpdate(_) => "set_auto_update",
        }
    }
}

/// The six reads of one refresh, in order.
pub fn refresh_calls() -> Vec<BackendCall> {
    vec![
        BackendCall::FetchFilter,
        BackendCall::FetchCache,
        BackendCall::FetchInstrumentation,
        BackendCall::FetchAllowList,
        BackendCall::FetchOverrides,
        BackendCall::FetchAutoUpdate,
    ]
}

struct State {
    // Popped front to back; the last entry repeats forever.
    filters: VecDeque<Result<FilterSnapshot, DomainError>>,
    cache: Vec<CacheEntry>,
    instrumentation: Vec<InstrumentationRecord>,
    allow_list: AllowList,
    overrides: OverrideMap,
    auto_update: AutoUpdateConfig,
    failures: HashMap<&'static str, DomainError>,
    accepted_token: Option<String>,
    calls: Vec<BackendCall>,
}

/// Scripted, stateful stand-in for the management API.
#[derive(Clone)]
pub struct MockBackendClient {
    state: Arc<Mutex<State>>,
}

impl MockBackendClient {
    pub fn new() -> Self {
        let mut filters = VecDeque::new();
        filters.push_back(Ok(FilterSnapshot::new(Timestamp::new(1_000, 0), 0)));
        Self {
            state: Arc::new(Mutex::new(State {
                filters,
                cache: Vec::new(),
                instrumentation: Vec::new(),
                allow_list: AllowList::new(),
                overrides: OverrideMap::new(),
                auto_update: AutoUpdateConfig::Disabled,
                failures: HashMap::new(),
                accepted_token: None,
                calls: Vec::new(),
            })),
        }
    }

    pub fn with_filters(self, filters: Vec<FilterSnapshot>) -> Self {
        self.with_filter_results(filters.into_iter().map(Ok).collect())
    }

    pub fn with_filter_results(self, results: Vec<Result<FilterSnapshot, DomainError>>) -> Self {
        self.state.lock().unwrap().filters = results.into_iter().collect();
        self
    }

    pub fn with_cache(self, cache: Vec<CacheEntry>) -> Self {
        self.state.lock().unwrap().cache = cache;
        self
    }

    pub fn with_instrumentation(self, records: Vec<InstrumentationRecord>) -> Self {
        self.state.lock().unwrap().instrumentation = records;
        self
    }

    pub fn with_allowed_domains(self, domains: Vec<&str>) -> Self {
        self.state.lock().unwrap().allow_list = domains.into_iter().map(str::to_string).collect();
        self
    }

    pub fn with_override(self, domain: &str, address: [u8; 4]) -> Self {
        self.state
            .lock()
            .unwrap()
            .overrides
            .insert(domain.to_string(), OverrideAddress(address));
        self
    }

    pub fn with_auto_update(self, config: AutoUpdateConfig) -> Self {
        self.state.lock().unwrap().auto_update = config;
        self
    }

    /// Only `token` is accepted; anything else is `Unauthorized`.
    pub fn accepting_token(self, token: &str) -> Self {
        self.state.lock().unwrap().accepted_token = Some(token.to_string());
        self
    }

    /// Every call to the named operation fails with `error`.
    pub fn fail(&self, operation: &'static str, error: DomainError) {
        self.state.lock().unwrap().failures.insert(operation, error);
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn count(&self, call: &BackendCall) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| *c == call)
            .count()
    }

    fn record(&self, call: BackendCall, credential: &Credential) -> Result<(), DomainError> {
        let mut state = self.state.lock().unwrap();
        let name = call.name();
        state.calls.push(call);

        if let Some(token) = &state.accepted_token {
            if token != credential.secret() {
                return Err(DomainError::Unauthorized);
            }
        }
        match state.failures.get(name) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl Default for MockBackendClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BackendClient for MockBackendClient {
    async fn fetch_filter(&self, credential: &Credential) -> Result<FilterSnapshot, DomainError> {
        self.record(BackendCall::FetchFilter, credential)?;
        let mut state = self.state.lock().unwrap();
        if state.filters.len() > 1 {
            state.filters.pop_front().unwrap()
        } else {
            state
                .filters
                .front()
                .cloned()
                .unwrap_or_else(|| Err(DomainError::Transport("no filter scripted".to_string())))
        }
    }

    async fn trigger_filter_rebuild(&self, credential: &Credential) -> Result<(), DomainError> {
        self.record(BackendCall::TriggerRebuild, credential)
    }

    async fn fetch_cache(&self, credential: &Credential) -> Result<Vec<CacheEntry>, DomainError> {
        self.record(BackendCall::FetchCache, credential)?;
        Ok(self.state.lock().unwrap().cache.clone())
    }

    async fn fetch_instrumentation(
        &self,
        credential: &Credential,
    ) -> Result<Vec<InstrumentationRecord>, DomainError> {
        self.record(BackendCall::FetchInstrumentation, credential)?;
        Ok(self.state.lock().unwrap().instrumentation.clone())
    }

    async fn fetch_allow_list(&self, credential: &Credential) -> Result<AllowList, DomainError> {
        self.record(BackendCall::FetchAllowList, credential)?;
        Ok(self.state.lock().unwrap().allow_list.clone())
    }

    async fn add_allowed_domain(
        &self,
        credential: &Credential,
        domain: &str,
    ) -> Result<(), DomainError> {
        self.record(BackendCall::AddAllowed(domain.to_string()), credential)?;
        self.state
            .lock()
            .unwrap()
            .allow_list
            .insert(domain.to_string());
        Ok(())
    }

    async fn remove_allowed_domain(
        &self,
        credential: &Credential,
        domain: &str,
    ) -> Result<(), DomainError> {
        self.record(BackendCall::RemoveAllowed(domain.to_string()), credential)?;
        self.state.lock().unwrap().allow_list.remove(domain);
        Ok(())
    }

    async fn fetch_overrides(&self, credential: &Credential) -> Result<OverrideMap, DomainError> {
        self.record(BackendCall::FetchOverrides, credential)?;
        Ok(self.state.lock().unwrap().overrides.clone())
    }

    async fn set_override(
        &self,
        credential: &Credential,
        domain: &str,
        address: OverrideAddress,
    ) -> Result<(), DomainError> {
        self.record(
            BackendCall::SetOverride(domain.to_string(), address),
            credential,
        )?;
        self.state
            .lock()
            .unwrap()
            .overrides
            .insert(domain.to_string(), address);
        Ok(())
    }

    async fn remove_override(
        &self,
        credential: &Credential,
        domain: &str,
    ) -> Result<(), DomainError> {
        self.record(BackendCall::RemoveOverride(domain.to_string()), credential)?;
        self.state.lock().unwrap().overrides.remove(domain);
        Ok(())
    }

    async fn fetch_auto_update(
        &self,
        credential: &Credential,
    ) -> Result<AutoUpdateConfig, DomainError> {
        self.record(BackendCall::FetchAutoUpdate, credential)?;
        Ok(self.state.lock().unwrap().auto_update)
    }

    async fn set_auto_update(
        &self,
        credential: &Credential,
        config: AutoUpdateConfig,
    ) -> Result<(), DomainError> {
        self.record(BackendCall::SetAutoUpdate(config), credential)?;
        self.state.lock().unwrap().auto_update = config;
        Ok(())
    }
}
