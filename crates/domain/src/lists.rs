use crate::errors::DomainError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Domains the filter must never block.
pub type AllowList = BTreeSet<String>;

/// Forced static answers, one per domain.
pub type OverrideMap = BTreeMap<String, OverrideAddress>;

/// Trims the operator's input and rejects empty names.
pub fn validate_domain_name(domain: &str) -> Result<String, DomainError> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidDomainName(domain.to_string()));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidDomainName(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverrideAddress(pub [u8; 4]);

impl OverrideAddress {
    pub fn octets(&self) -> [u8; 4] {
        self.0
    }

    pub fn from_octets(octets: &[u8]) -> Result<Self, DomainError> {
        let octets: [u8; 4] = octets
            .try_into()
            .map_err(|_| DomainError::InvalidAddress(format!("{} octets", octets.len())))?;
        Ok(Self(octets))
    }
}

impl FromStr for OverrideAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Ipv4Addr>()
            .map(|addr| Self(addr.octets()))
            .map_err(|_| DomainError::InvalidAddress(s.to_string()))
    }
}

impl fmt::Display for OverrideAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Ipv4Addr::from(self.0))
    }
}
