use crate::ports::BackendClient;
use crate::session::{ConsoleSession, UpdateWatchState};
use crate::use_cases::console::RefreshConsoleUseCase;
use dns_console_domain::{ConsoleViewModel, DomainError};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
const DEFAULT_MAX_POLLS: u32 = 600;

/// How long to wait for a rebuild to become visible.
#[derive(Debug, Clone, Copy)]
pub struct WatchPolicy {
    pub poll_interval: Duration,
    /// `None` polls until the timestamp moves or the token is cancelled.
    pub max_polls: Option<u32>,
}

impl Default for WatchPolicy {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_polls: Some(DEFAULT_MAX_POLLS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    /// The first view showing the rebuilt filter.
    pub view: ConsoleViewModel,
    /// Waits spent between refreshes before the new filter appeared.
    pub polls: u32,
}

/// Triggers a server-side filter rebuild and polls until its new
/// `created_at` shows up.
///
/// State flow: `Idle -> Requested -> Polling -> Idle`. Only one cycle may run
/// per session; a concurrent call fails with `UpdateInProgress`. The session
/// returns to `Idle` on every exit path.
pub struct WatchFilterUpdateUseCase {
    client: Arc<dyn BackendClient>,
    session: Arc<ConsoleSession>,
    refresh: Arc<RefreshConsoleUseCase>,
    policy: WatchPolicy,
}

impl WatchFilterUpdateUseCase {
    pub fn new(
        client: Arc<dyn BackendClient>,
        session: Arc<ConsoleSession>,
        refresh: Arc<RefreshConsoleUseCase>,
    ) -> Self {
        Self {
            client,
            session,
            refresh,
            policy: WatchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: WatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[instrument(skip(self, cancel))]
    pub async fn execute(&self, cancel: CancellationToken) -> Result<UpdateOutcome, DomainError> {
        let guard = self.session.begin_update()?;
        if cancel.is_cancelled() {
            return Err(DomainError::Cancelled);
        }

        // Captured before the command so a fast rebuild cannot be missed.
        let seen = self.session.seen_created_at();
        let credential = self.session.credential()?;

        info!(seen_created_at = ?seen, "Requesting filter rebuild");
        self.session
            .observe(self.client.trigger_filter_rebuild(&credential).await)?;

        let mut view = self.refresh.execute().await?;
        let mut polls: u32 = 0;
        guard.set_state(UpdateWatchState::Polling { polls });

        while Some(view.filter_created_at) == seen {
            if let Some(limit) = self.policy.max_polls {
                if polls >= limit {
                    warn!(polls, "Filter rebuild not visible before poll limit");
                    return Err(DomainError::Timeout { attempts: polls });
                }
            }

            tokio::select! {
                _ = cancel.cancelled() => {
                    info!(polls, "Filter update watch cancelled");
                    return Err(DomainError::Cancelled);
                }
                _ = tokio::time::sleep(self.policy.poll_interval) => {}
            }

            polls += 1;
            guard.set_state(UpdateWatchState::Polling { polls });
            view = self.refresh.execute().await?;
        }

        info!(
            polls,
            created_at = %view.filter_created_at,
            "Filter rebuild visible"
        );

        Ok(UpdateOutcome { view, polls })
    }
}
