use crate::timestamp::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub name: String,
    pub valid_until: Timestamp,
}

impl CacheEntry {
    pub fn new(name: impl Into<String>, valid_until: Timestamp) -> Self {
        Self {
            name: name.into(),
            valid_until,
        }
    }
}
