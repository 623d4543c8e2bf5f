use crate::ports::BackendClient;
use crate::session::ConsoleSession;
use crate::use_cases::console::RefreshConsoleUseCase;
use dns_console_domain::{AutoUpdateConfig, ConsoleViewModel, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct SetAutoUpdateUseCase {
    client: Arc<dyn BackendClient>,
    session: Arc<ConsoleSession>,
    refresh: Arc<RefreshConsoleUseCase>,
}

impl SetAutoUpdateUseCase {
    pub fn new(
        client: Arc<dyn BackendClient>,
        session: Arc<ConsoleSession>,
        refresh: Arc<RefreshConsoleUseCase>,
    ) -> Self {
        Self {
            client,
            session,
            refresh,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, config: AutoUpdateConfig) -> Result<ConsoleViewModel, DomainError> {
        if let AutoUpdateConfig::Every { interval } = config {
            AutoUpdateConfig::every(interval)?;
        }
        let credential = self.session.credential()?;

        self.session
            .observe(self.client.set_auto_update(&credential, config).await)?;

        info!(auto_update = %config, "Auto-update configured");

        self.refresh.execute().await
    }
}
