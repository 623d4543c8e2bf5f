use crate::errors::DomainError;
use std::fmt;

/// Server-side scheduled filter rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoUpdateConfig {
    #[default]
    Disabled,
    Every { interval: u64 },
}

impl AutoUpdateConfig {
    pub fn every(interval: u64) -> Result<Self, DomainError> {
        if interval == 0 {
            return Err(DomainError::InvalidAutoUpdateInterval(interval));
        }
        Ok(Self::Every { interval })
    }

    pub fn from_wire(value: Option<u64>) -> Self {
        match value {
            Some(interval) if interval > 0 => Self::Every { interval },
            _ => Self::Disabled,
        }
    }

    pub fn to_wire(self) -> Option<u64> {
        match self {
            Self::Disabled => None,
            Self::Every { interval } => Some(interval),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Every { .. })
    }
}

impl fmt::Display for AutoUpdateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::Every { interval } => write!(f, "every {}s", interval),
        }
    }
}
