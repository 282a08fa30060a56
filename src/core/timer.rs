//! Cooldown arithmetic for chest unlocks, boosts, daily claims and
//! tournament entries.

use super::constants::{MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, READY_TEXT};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// A countdown that started at `started_at_ms` and lasts `duration_ms`.
///
/// Timers hold no running state; remaining time is derived from `now` on
/// every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownTimer {
    pub started_at_ms: i64,
    pub duration_ms: u64,
}

impl CooldownTimer {
    pub fn new(started_at_ms: i64, duration_ms: u64) -> Self {
        Self {
            started_at_ms,
            duration_ms,
        }
    }

    /// Milliseconds left at `now`, floored at zero.
    ///
    /// A `now` earlier than the start (clock skew) counts as zero elapsed,
    /// so the result never exceeds `duration_ms`.
    pub fn remaining(&self, now: i64) -> u64 {
        let elapsed = now.saturating_sub(self.started_at_ms).max(0) as u64;
        self.duration_ms.saturating_sub(elapsed)
    }

    pub fn is_ready(&self, now: i64) -> bool {
        self.remaining(now) == 0
    }

    /// Epoch milliseconds at which the timer reaches zero.
    pub fn ends_at(&self) -> i64 {
        self.started_at_ms
            .saturating_add(i64::try_from(self.duration_ms).unwrap_or(i64::MAX))
    }

    /// `describe(self.remaining(now))`.
    pub fn describe_remaining(&self, now: i64) -> String {
        describe(self.remaining(now))
    }
}

/// Remaining time on `timer` at `now`.
pub fn remaining(timer: &CooldownTimer, now: i64) -> u64 {
    timer.remaining(now)
}

/// Human-readable remaining time.
///
/// Uses the largest unit pair that applies: `"1h 1m"`, `"4m 5s"`, `"9s"`.
/// Zero renders as `"Ready!"`. Partial seconds are truncated.
pub fn describe(ms: u64) -> String {
    if ms == 0 {
        return READY_TEXT.to_string();
    }
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
