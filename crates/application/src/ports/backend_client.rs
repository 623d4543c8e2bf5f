use async_trait::async_trait;
use dns_console_domain::{
    AllowList, AutoUpdateConfig, CacheEntry, Credential, DomainError, FilterSnapshot,
    InstrumentationRecord, OverrideAddress, OverrideMap,
};

/// Port for the filtering service's management API.
///
/// Every call presents `credential`. Implementations map a rejected credential
/// to `DomainError::Unauthorized` and every other failure to
/// `DomainError::Transport`; they never retry.
#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn fetch_filter(&self, credential: &Credential) -> Result<FilterSnapshot, DomainError>;

    /// Acknowledged once the server accepted the request, not when the
    /// rebuild is done.
    async fn trigger_filter_rebuild(&self, credential: &Credential) -> Result<(), DomainError>;

    async fn fetch_cache(&self, credential: &Credential) -> Result<Vec<CacheEntry>, DomainError>;

    async fn fetch_instrumentation(
        &self,
        credential: &Credential,
    ) -> Result<Vec<InstrumentationRecord>, DomainError>;

    async fn fetch_allow_list(&self, credential: &Credential) -> Result<AllowList, DomainError>;

    async fn add_allowed_domain(
        &self,
        credential: &Credential,
        domain: &str,
    ) -> Result<(), DomainError>;

    async fn remove_allowed_domain(
        &self,
        credential: &Credential,
        domain: &str,
    ) -> Result<(), DomainError>;

    async fn fetch_overrides(&self, credential: &Credential) -> Result<OverrideMap, DomainError>;

    async fn set_override(
        &self,
        credential: &Credential,
        domain: &str,
        address: OverrideAddress,
    ) -> Result<(), DomainError>;

    async fn remove_override(&self, credential: &Credential, domain: &str)
        -> Result<(), DomainError>;

    async fn fetch_auto_update(
        &self,
        credential: &Credential,
    ) -> Result<AutoUpdateConfig, DomainError>;

    async fn set_auto_update(
        &self,
        credential: &Credential,
        config: AutoUpdateConfig,
    ) -> Result<(), DomainError>;
}
