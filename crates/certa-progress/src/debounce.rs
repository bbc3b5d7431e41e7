//! # Debounced Flush Deadline
//!
//! Evidence edits should not hit storage on every keystroke; they schedule
//! a flush after an idle window instead. `FlushTimer` owns that deadline
//! as an explicit, cancelable resource scoped to the active session —
//! re-arming replaces the previous deadline (coalescing, not
//! accumulating), and unloading a session cancels it so a stale flush can
//! never fire against a switched-away or deleted client.
//!
//! The timer holds state only; it never sleeps. Callers pass the current
//! `Instant`, which keeps the single-threaded event loop in charge of
//! time and makes coalescing testable without waiting.

use std::time::{Duration, Instant};

/// Idle window after the last edit before an automatic flush.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(300);

/// Aggressive window for keystroke-driven saves.
pub const KEYSTROKE_WINDOW: Duration = Duration::from_secs(1);

/// A cancelable, re-armable flush deadline.
#[derive(Debug, Clone)]
pub struct FlushTimer {
    window: Duration,
    deadline: Option<Instant>,
}

impl FlushTimer {
    /// Timer with the default idle window.
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }

    /// Timer with a custom idle window.
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// The configured idle window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Arm (or re-arm) the deadline at `now + window`.
    ///
    /// Re-arming replaces any earlier deadline: many edits inside the
    /// window coalesce into one flush at `last edit + window`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is armed.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whether the armed deadline has passed.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }

    /// Consume the deadline if it has passed.
    ///
    /// Returns `true` exactly once per elapsed deadline; the caller
    /// performs the flush on `true`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}

impl Default for FlushTimer {
    fn default() -> Self {
        Self::new()
    }
}
