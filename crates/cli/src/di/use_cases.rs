use dns_console_application::ports::BackendClient;
use dns_console_application::use_cases::{
    RefreshConsoleUseCase, RemoveOverrideUseCase, ResortConsoleUseCase,
    SetAllowListMembershipUseCase, SetAutoUpdateUseCase, SetOverrideUseCase,
    WatchFilterUpdateUseCase, WatchPolicy,
};
use dns_console_application::ConsoleSession;
use dns_console_domain::{ConsoleConfig, Credential};
use dns_console_infrastructure::HttpBackendClient;
use std::sync::Arc;

pub struct UseCases {
    pub session: Arc<ConsoleSession>,
    pub refresh: Arc<RefreshConsoleUseCase>,
    pub resort: Arc<ResortConsoleUseCase>,
    pub set_allow_membership: Arc<SetAllowListMembershipUseCase>,
    pub set_override: Arc<SetOverrideUseCase>,
    pub remove_override: Arc<RemoveOverrideUseCase>,
    pub set_auto_update: Arc<SetAutoUpdateUseCase>,
    pub watch_update: Arc<WatchFilterUpdateUseCase>,
}

impl UseCases {
    pub fn new(config: &ConsoleConfig) -> anyhow::Result<Self> {
        let client: Arc<dyn BackendClient> = Arc::new(HttpBackendClient::new(&config.api)?);

        let mut session = ConsoleSession::new(config.presentation.initial_sort());
        if let Some(credential) = config.api.token.clone().and_then(Credential::new) {
            session = session.with_credential(credential);
        }
        let session = Arc::new(session);

        let refresh = Arc::new(RefreshConsoleUseCase::new(client.clone(), session.clone()));
        let policy = WatchPolicy {
            poll_interval: config.watcher.poll_interval(),
            max_polls: config.watcher.poll_limit(),
        };

        Ok(Self {
            resort: Arc::new(ResortConsoleUseCase::new(session.clone())),
            set_allow_membership: Arc::new(SetAllowListMembershipUseCase::new(
                client.clone(),
                session.clone(),
                refresh.clone(),
            )),
            set_override: Arc::new(SetOverrideUseCase::new(
                client.clone(),
                session.clone(),
                refresh.clone(),
            )),
            remove_override: Arc::new(RemoveOverrideUseCase::new(
                client.clone(),
                session.clone(),
                refresh.clone(),
            )),
            set_auto_update: Arc::new(SetAutoUpdateUseCase::new(
                client.clone(),
                session.clone(),
                refresh.clone(),
            )),
            watch_update: Arc::new(
                WatchFilterUpdateUseCase::new(client, session.clone(), refresh.clone())
                    .with_policy(policy),
            ),
            refresh,
            session,
        })
    }
}
