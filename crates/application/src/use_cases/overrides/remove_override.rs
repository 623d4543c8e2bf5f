use crate::ports::BackendClient;
use crate::session::ConsoleSession;
use crate::use_cases::console::RefreshConsoleUseCase;
use dns_console_domain::{validate_domain_name, ConsoleViewModel, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct RemoveOverrideUseCase {
    client: Arc<dyn BackendClient>,
    session: Arc<ConsoleSession>,
    refresh: Arc<RefreshConsoleUseCase>,
}

impl RemoveOverrideUseCase {
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
    pub async fn execute(&self, domain: &str) -> Result<ConsoleViewModel, DomainError> {
        let domain = validate_domain_name(domain)?;
        let credential = self.session.credential()?;

        self.session
            .observe(self.client.remove_override(&credential, &domain).await)?;

        info!(domain = %domain, "Override removed");

        self.refresh.execute().await
    }
}
