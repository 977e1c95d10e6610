//! Timestamps.
//!
//! The core never reads a clock. Callers pass the current time into every
//! operation that needs one, which keeps dispatch deterministic and lets
//! tests pin time exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds since the Unix epoch.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeStamp(u64);

impl TimeStamp {
    /// Construct from milliseconds since epoch.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Milliseconds since epoch.
    #[must_use]
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// This timestamp advanced by `millis`.
    #[must_use]
    pub fn saturating_add_millis(&self, millis: u64) -> Self {
        Self(self.0.saturating_add(millis))
    }

    /// Display form used on post cards: `YYYY.MM.DD HH:MM`.
    ///
    /// Falls back to the raw millisecond value for timestamps outside
    /// chrono's representable range.
    #[must_use]
    pub fn format_display(&self) -> String {
        match DateTime::<Utc>::from_timestamp_millis(self.0 as i64) {
            Some(dt) => dt.format("%Y.%m.%d %H:%M").to_string(),
            None => self.0.to_string(),
        }
    }
}

impl fmt::Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
