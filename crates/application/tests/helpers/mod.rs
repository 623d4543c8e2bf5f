#![allow(dead_code)]

pub mod mock_backend;

#[allow(unused_imports)]
pub use mock_backend::{refresh_calls, BackendCall, MockBackendClient};

use dns_console_application::use_cases::RefreshConsoleUseCase;
use dns_console_application::ConsoleSession;
use dns_console_domain::{Credential, SortState, Timestamp};
use std::sync::Arc;

pub const TOKEN: &str = "correct-horse";

pub fn t(secs: i64) -> Timestamp {
    Timestamp::new(secs, 0)
}

pub fn logged_in_session() -> Arc<ConsoleSession> {
    Arc::new(
        ConsoleSession::new(SortState::default())
            .with_credential(Credential::new(TOKEN).unwrap()),
    )
}

pub fn refresh_for(
    backend: &Arc<MockBackendClient>,
    session: &Arc<ConsoleSession>,
) -> Arc<RefreshConsoleUseCase> {
    Arc::new(RefreshConsoleUseCase::new(backend.clone(), session.clone()))
}
