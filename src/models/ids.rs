//! Record identifiers
//!
//! Records are keyed by a time-derived integer (milliseconds since the Unix
//! epoch). `IdGenerator` keeps ids strictly increasing within a process so two
//! records created in the same millisecond still get distinct ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Identifier of an expense or payment record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wrap a raw id value
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Issues unique, monotonically increasing record ids from the wall clock
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id: the current time in milliseconds, or one past the last id
    /// when the clock has not moved forward
    pub fn next_id(&self) -> RecordId {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&self, now_millis: i64) -> RecordId {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = if now_millis > last { now_millis } else { last + 1 };
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return RecordId(candidate),
                Err(current) => last = current,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_time_derived() {
        let before = Utc::now().timestamp_millis();
        let id = IdGenerator::new().next_id();
        assert!(id.as_i64() >= before);
    }

    #[test]
    fn test_same_tick_does_not_collide() {
        let gen = IdGenerator::new();
        let a = gen.next_at(1_700_000_000_000);
        let b = gen.next_at(1_700_000_000_000);
        let c = gen.next_at(1_699_999_999_999);
        assert_eq!(a.as_i64(), 1_700_000_000_000);
        assert_eq!(b.as_i64(), 1_700_000_000_001);
        assert_eq!(c.as_i64(), 1_700_000_000_002);
    }

    #[test]
    fn test_rapid_ids_unique() {
        let gen = IdGenerator::new();
        let ids: HashSet<_> = (0..1000).map(|_| gen.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_parse_and_display() {
        let id: RecordId = " 1736899200000 ".parse().unwrap();
        assert_eq!(id.to_string(), "1736899200000");
        assert!("abc".parse::<RecordId>().is_err());
    }
}
