use crate::ports::BackendClient;
use crate::session::ConsoleSession;
use crate::use_cases::console::RefreshConsoleUseCase;
use dns_console_domain::{validate_domain_name, ConsoleViewModel, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct SetAllowListMembershipUseCase {
    client: Arc<dyn BackendClient>,
    session: Arc<ConsoleSession>,
    refresh: Arc<RefreshConsoleUseCase>,
}

impl SetAllowListMembershipUseCase {
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

    /// Adds (`present = true`) or removes `domain`, then refreshes every section.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: &str,
        present: bool,
    ) -> Result<ConsoleViewModel, DomainError> {
        let domain = validate_domain_name(domain)?;
        let credential = self.session.credential()?;

        let result = if present {
            self.client.add_allowed_domain(&credential, &domain).await
        } else {
            self.client.remove_allowed_domain(&credential, &domain).await
        };
        self.session.observe(result)?;

        info!(domain = %domain, present, "Allow-list updated");

        self.refresh.execute().await
    }
}
