use super::wire::{
    allow_list_from_wire, overrides_from_wire, CacheResponse, DomainRequest, EmptyRequest,
    FilterResponse, InstrumentationResponse, OverrideRequest,
};
use async_trait::async_trait;
use dns_console_application::ports::BackendClient;
use dns_console_domain::config::ApiConfig;
use dns_console_domain::{
    AllowList, AutoUpdateConfig, CacheEntry, Credential, DomainError, FilterSnapshot,
    InstrumentationRecord, OverrideAddress, OverrideMap,
};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

const FILTER: &str = "filter";
const UPDATE_FILTER: &str = "update-filter";
const CACHE: &str = "cache";
const INSTRUMENTATION: &str = "instrumentation";
const ALLOWED_DOMAINS: &str = "allowed-domains";
const OVERRIDES: &str = "overrides";
const AUTO_UPDATE_FILTER: &str = "auto-update-filter";

/// `BackendClient` over the filtering service's JSON API.
///
/// Each call is a single request: no retries, bearer auth, 401 maps to
/// `Unauthorized` and every other failure to `Transport`.
pub struct HttpBackendClient {
    api_root: String,
    http: reqwest::Client,
}

impl HttpBackendClient {
    pub fn new(config: &ApiConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("dns-console/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        Ok(Self {
            api_root: api_root(&config.base_url, &config.api_prefix),
            http,
        })
    }

    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.api_root, name)
    }

    async fn get_json<T>(&self, credential: &Credential, name: &str) -> Result<T, DomainError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(self.endpoint(name))
            .bearer_auth(credential.secret())
            .send()
            .await
            .map_err(|e| transport(name, e))?;

        let status = response.status();
        check_status(status, name)?;

        let bytes = response.bytes().await.map_err(|e| transport(name, e))?;
        debug!(endpoint = name, bytes = bytes.len(), "API read completed");

        serde_json::from_slice::<T>(&bytes)
            .map_err(|e| DomainError::Transport(format!("decode error for {}: {}", name, e)))
    }

    async fn send_json<B>(
        &self,
        method: Method,
        credential: &Credential,
        name: &str,
        body: &B,
    ) -> Result<(), DomainError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .request(method.clone(), self.endpoint(name))
            .bearer_auth(credential.secret())
            .json(body)
            .send()
            .await
            .map_err(|e| transport(name, e))?;

        check_status(response.status(), name)?;
        debug!(endpoint = name, method = %method, "API write acknowledged");
        Ok(())
    }
}

fn api_root(base_url: &str, api_prefix: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let prefix = api_prefix.trim().trim_matches('/');
    if prefix.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, prefix)
    }
}

fn check_status(status: StatusCode, name: &str) -> Result<(), DomainError> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(DomainError::Unauthorized);
    }
    if !status.is_success() {
        return Err(DomainError::Transport(format!(
            "HTTP {} for {}",
            status.as_u16(),
            name
        )));
    }
    Ok(())
}

fn transport(name: &str, error: reqwest::Error) -> DomainError {
    DomainError::Transport(format!("request error for {}: {}", name, error))
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn fetch_filter(&self, credential: &Credential) -> Result<FilterSnapshot, DomainError> {
        let response: FilterResponse = self.get_json(credential, FILTER).await?;
        Ok(response.into())
    }

    async fn trigger_filter_rebuild(&self, credential: &Credential) -> Result<(), DomainError> {
        self.send_json(Method::POST, credential, UPDATE_FILTER, &EmptyRequest {})
            .await
    }

    async fn fetch_cache(&self, credential: &Credential) -> Result<Vec<CacheEntry>, DomainError> {
        let response: CacheResponse = self.get_json(credential, CACHE).await?;
        Ok(response.into())
    }

    async fn fetch_instrumentation(
        &self,
        credential: &Credential,
    ) -> Result<Vec<InstrumentationRecord>, DomainError> {
        let response: InstrumentationResponse = self.get_json(credential, INSTRUMENTATION).await?;
        Ok(response.into())
    }

    async fn fetch_allow_list(&self, credential: &Credential) -> Result<AllowList, DomainError> {
        let domains: Vec<String> = self.get_json(credential, ALLOWED_DOMAINS).await?;
        Ok(allow_list_from_wire(domains))
    }

    async fn add_allowed_domain(
        &self,
        credential: &Credential,
        domain: &str,
    ) -> Result<(), DomainError> {
        self.send_json(
            Method::POST,
            credential,
            ALLOWED_DOMAINS,
            &DomainRequest { name: domain },
        )
        .await
    }

    async fn remove_allowed_domain(
        &self,
        credential: &Credential,
        domain: &str,
    ) -> Result<(), DomainError> {
        self.send_json(
            Method::DELETE,
            credential,
            ALLOWED_DOMAINS,
            &DomainRequest { name: domain },
        )
        .await
    }

    async fn fetch_overrides(&self, credential: &Credential) -> Result<OverrideMap, DomainError> {
        let raw: BTreeMap<String, Vec<u8>> = self.get_json(credential, OVERRIDES).await?;
        overrides_from_wire(raw)
    }

    async fn set_override(
        &self,
        credential: &Credential,
        domain: &str,
        address: OverrideAddress,
    ) -> Result<(), DomainError> {
        self.send_json(
            Method::POST,
            credential,
            OVERRIDES,
            &OverrideRequest {
                name: domain,
                address: address.octets(),
            },
        )
        .await
    }

    async fn remove_override(
        &self,
        credential: &Credential,
        domain: &str,
    ) -> Result<(), DomainError> {
        self.send_json(
            Method::DELETE,
            credential,
            OVERRIDES,
            &DomainRequest { name: domain },
        )
        .await
    }

    async fn fetch_auto_update(
        &self,
        credential: &Credential,
    ) -> Result<AutoUpdateConfig, DomainError> {
        let interval: Option<u64> = self.get_json(credential, AUTO_UPDATE_FILTER).await?;
        Ok(AutoUpdateConfig::from_wire(interval))
    }

    async fn set_auto_update(
        &self,
        credential: &Credential,
        config: AutoUpdateConfig,
    ) -> Result<(), DomainError> {
        self.send_json(
            Method::POST,
            credential,
            AUTO_UPDATE_FILTER,
            &config.to_wire(),
        )
        .await
    }
}
