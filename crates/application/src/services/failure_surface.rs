use dns_console_domain::DomainError;

/// Where a failed operation sends the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureSurface {
    /// Credential entry; the stored credential is gone or was never set.
    Login,
    /// Error notice; the last good view stays on screen.
    Notice,
}

/// `login_on_any_failure` restores the legacy console behavior of dropping
/// back to the credential prompt for every failure, transport errors included.
pub fn failure_surface(error: &DomainError, login_on_any_failure: bool) -> FailureSurface {
    if error.requires_login() || login_on_any_failure {
        FailureSurface::Login
    } else {
        FailureSurface::Notice
    }
}
