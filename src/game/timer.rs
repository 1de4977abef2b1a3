//! Host-driven game clock.
//!
//! The timer never reads a wall clock itself: every operation takes `now`
//! from the caller, so tests drive it with synthetic timestamps like the
//! rest of the engine. It accumulates run spans across pauses; pausing when
//! already paused is idempotent.

use serde::{Deserialize, Serialize};

use crate::core::settings::TimerMode;

/// Elapsed/countdown clock for a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTimer {
    /// Countdown limit, if any.
    countdown_ms: Option<u64>,
    /// Time accumulated over completed run spans.
    accumulated_ms: u64,
    /// Start of the current run span, if running.
    running_since: Option<u64>,
}

impl GameTimer {
    /// A stopped count-up timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A timer for the given mode (countdown when the mode has one).
    #[must_use]
    pub fn for_mode(mode: TimerMode) -> Self {
        Self {
            countdown_ms: mode.duration_ms(),
            ..Self::default()
        }
    }

    /// Whether the timer is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Start (or resume) at `now`. No-op if already running.
    pub fn start(&mut self, now_ms: u64) {
        if self.running_since.is_none() {
            self.running_since = Some(now_ms);
        }
    }

    /// Pause at `now`, banking the current span. Idempotent.
    pub fn pause(&mut self, now_ms: u64) {
        if let Some(since) = self.running_since.take() {
            self.accumulated_ms += now_ms.saturating_sub(since);
        }
    }

    /// Reset to zero. Keeps running if it was running.
    pub fn reset(&mut self, now_ms: u64) {
        self.accumulated_ms = 0;
        if self.running_since.is_some() {
            self.running_since = Some(now_ms);
        }
    }

    /// Total elapsed time at `now`.
    #[must_use]
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        let current = self
            .running_since
            .map_or(0, |since| now_ms.saturating_sub(since));
        self.accumulated_ms + current
    }

    /// Remaining countdown time at `now`. `None` for count-up timers.
    #[must_use]
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.countdown_ms
            .map(|limit| limit.saturating_sub(self.elapsed_ms(now_ms)))
    }

    /// Whether a countdown has run out at `now`. Count-up timers never
    /// expire.
    #[must_use]
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.remaining_ms(now_ms) == Some(0)
    }
}

/// Format a duration as `m:ss`.
#[must_use]
pub fn format_time(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
