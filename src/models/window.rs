//! Working-hours window model.
//!
//! Defines the interval during which the drone is allowed to operate.
//! Unlike a general availability calendar, a dispatch window is a single
//! closed interval: both endpoints are inclusive.

use serde::{Deserialize, Serialize};

/// A closed working-hours interval `[start, end]` in seconds of day.
///
/// Bounds are validated by [`Scheduler::from_config`] before any run
/// starts; the type itself performs no checks.
///
/// [`Scheduler::from_config`]: crate::scheduler::Scheduler::from_config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchWindow {
    /// Interval start (seconds, inclusive).
    pub start_secs: i64,
    /// Interval end (seconds, inclusive).
    pub end_secs: i64,
}

impl DispatchWindow {
    /// Creates a new window.
    pub fn new(start_secs: i64, end_secs: i64) -> Self {
        Self {
            start_secs,
            end_secs,
        }
    }

    /// Whether an instant falls within the window (endpoints included).
    #[inline]
    pub fn contains(&self, secs: i64) -> bool {
        secs >= self.start_secs && secs <= self.end_secs
    }

    /// Window length in seconds.
    #[inline]
    pub fn duration_secs(&self) -> i64 {
        self.end_secs - self.start_secs
    }
}
