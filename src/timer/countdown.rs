//! Pausable whole-second countdown.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Remaining time at or below which the countdown counts as running low.
pub const LOW_TIME_THRESHOLD_SECS: u32 = 10;

/// What a tick observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownStatus {
    /// Counting down.
    Running,
    /// Paused; elapsed time was ignored.
    Paused,
    /// Reached zero on this tick. Reported once.
    Expired,
    /// Already expired earlier.
    Idle,
}

/// Counts whole seconds down from an initial value.
///
/// Elapsed time accumulates across ticks, so many short frames add up to a
/// second just like one long one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    initial_secs: u32,
    remaining_secs: u32,
    carry: Duration,
    paused: bool,
    expiry_reported: bool,
}

impl Countdown {
    /// Create a running countdown.
    #[must_use]
    pub fn new(initial_secs: u32) -> Self {
        Self {
            initial_secs,
            remaining_secs: initial_secs,
            carry: Duration::ZERO,
            paused: false,
            expiry_reported: false,
        }
    }

    /// Seconds left.
    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// The value the countdown (re)started from.
    #[must_use]
    pub fn initial_secs(&self) -> u32 {
        self.initial_secs
    }

    /// Whether the countdown is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether zero has been reached.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Whether the remaining time is at or below the warning threshold.
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.remaining_secs <= LOW_TIME_THRESHOLD_SECS
    }

    /// Stop counting. Partial seconds already elapsed are kept.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Continue counting.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Start over from `initial_secs`, running.
    pub fn reset(&mut self, initial_secs: u32) {
        *self = Self::new(initial_secs);
    }

    /// Feed elapsed time.
    pub fn tick(&mut self, elapsed: Duration) -> CountdownStatus {
        if self.is_expired() {
            if self.expiry_reported {
                return CountdownStatus::Idle;
            }
            self.expiry_reported = true;
            debug!(initial = self.initial_secs, "countdown expired");
            return CountdownStatus::Expired;
        }
        if self.paused {
            return CountdownStatus::Paused;
        }

        self.carry = self.carry.saturating_add(elapsed);
        let whole = self.carry.as_secs();
        self.carry -= Duration::from_secs(whole);

        let whole = u32::try_from(whole).unwrap_or(u32::MAX);
        self.remaining_secs = self.remaining_secs.saturating_sub(whole);

        if self.is_expired() {
            self.carry = Duration::ZERO;
            self.expiry_reported = true;
            debug!(initial = self.initial_secs, "countdown expired");
            CountdownStatus::Expired
        } else {
            CountdownStatus::Running
        }
    }
}
