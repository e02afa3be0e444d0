//! Countdown timer state.
//!
//! The session consumes a small contract: remaining time, an active flag,
//! a display value, and start/pause/reset. Ticking is driven by the
//! session's logical clock rather than a background thread, so timer
//! behavior is deterministic in tests.

use serde::{Deserialize, Serialize};

/// A pausable countdown with millisecond resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    initial_ms: u64,
    remaining_ms: u64,
    active: bool,
}

impl Countdown {
    /// Create a countdown of `initial_secs` seconds, not yet running.
    #[must_use]
    pub fn new(initial_secs: u32) -> Self {
        let initial_ms = u64::from(initial_secs) * 1000;
        Self {
            initial_ms,
            remaining_ms: initial_ms,
            active: false,
        }
    }

    /// Start (or resume) the countdown. No effect once expired.
    pub fn start(&mut self) {
        if self.remaining_ms > 0 {
            self.active = true;
        }
    }

    /// Pause the countdown, keeping the remaining time.
    pub fn pause(&mut self) {
        self.active = false;
    }

    /// Restore the initial value and stop.
    pub fn reset(&mut self) {
        self.remaining_ms = self.initial_ms;
        self.active = false;
    }

    /// Advance the countdown by `delta_ms` while active.
    ///
    /// Clamps at zero and deactivates on expiry. Returns `true` only on
    /// the running-to-expired transition, so the caller reacts to expiry
    /// exactly once.
    pub fn tick(&mut self, delta_ms: u64) -> bool {
        if !self.active {
            return false;
        }

        self.remaining_ms = self.remaining_ms.saturating_sub(delta_ms);

        if self.remaining_ms == 0 {
            self.active = false;
            true
        } else {
            false
        }
    }

    /// Remaining time in milliseconds.
    #[must_use]
    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    /// Remaining time in whole seconds, rounded up.
    #[must_use]
    pub fn remaining_secs(&self) -> u64 {
        self.remaining_ms.div_ceil(1000)
    }

    /// Is the countdown running?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Has the countdown reached zero?
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining_ms == 0
    }

    /// Display value in "M:SS" form, e.g. "1:00" or "0:07".
    #[must_use]
    pub fn display(&self) -> String {
        let secs = self.remaining_secs();
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}
