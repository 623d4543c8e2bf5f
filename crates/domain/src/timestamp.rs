use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// A server-side instant as the filtering service serializes it.
///
/// Ordering is by seconds first, then by the sub-second nanosecond offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    pub secs_since_epoch: i64,
    pub nanos_since_epoch: u32,
}

impl Timestamp {
    pub fn new(secs_since_epoch: i64, nanos_since_epoch: u32) -> Self {
        Self {
            secs_since_epoch,
            nanos_since_epoch,
        }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self::new(i64::try_from(secs).unwrap_or(i64::MAX), 0)
    }

    /// Signed distance `self - earlier` in nanoseconds. Negative when `self`
    /// precedes `earlier`.
    pub fn nanos_since(&self, earlier: &Timestamp) -> i128 {
        let secs = i128::from(self.secs_since_epoch) - i128::from(earlier.secs_since_epoch);
        secs * NANOS_PER_SEC + i128::from(self.nanos_since_epoch)
            - i128::from(earlier.nanos_since_epoch)
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.secs_since_epoch, self.nanos_since_epoch)
            .single()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S UTC")),
            None => write!(
                f,
                "{}.{:09}s",
                self.secs_since_epoch, self.nanos_since_epoch
            ),
        }
    }
}
