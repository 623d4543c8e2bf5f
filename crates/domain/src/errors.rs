use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Credential rejected by the filtering service")]
    Unauthorized,

    #[error("No credential stored; log in first")]
    MissingCredential,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Filter update not visible after {attempts} polls")]
    Timeout { attempts: u32 },

    #[error("Filter update watch cancelled")]
    Cancelled,

    #[error("A filter update is already being watched")]
    UpdateInProgress,

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IPv4 address: {0}")]
    InvalidAddress(String),

    #[error("Invalid auto-update interval: {0}")]
    InvalidAutoUpdateInterval(u64),
}

impl DomainError {
    /// True for failures that require the operator to re-enter a credential.
    pub fn requires_login(&self) -> bool {
        matches!(self, DomainError::Unauthorized | DomainError::MissingCredential)
    }
}
