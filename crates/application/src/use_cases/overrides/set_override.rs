use crate::ports::BackendClient;
use crate::session::ConsoleSession;
use crate::use_cases::console::RefreshConsoleUseCase;
use dns_console_domain::{validate_domain_name, ConsoleViewModel, DomainError, OverrideAddress};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct SetOverrideUseCase {
    client: Arc<dyn BackendClient>,
    session: Arc<ConsoleSession>,
    refresh: Arc<RefreshConsoleUseCase>,
}

impl SetOverrideUseCase {
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

    /// Replaces any existing override for `domain`.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: &str,
        address: OverrideAddress,
    ) -> Result<ConsoleViewModel, DomainError> {
        let domain = validate_domain_name(domain)?;
        let credential = self.session.credential()?;

        self.session
            .observe(self.client.set_override(&credential, &domain, address).await)?;

        info!(domain = %domain, address = %address, "Override set");

        self.refresh.execute().await
    }
}
