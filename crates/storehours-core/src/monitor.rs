//! Cooperative open-status monitor.
//!
//! The booking screen refreshes its status indicator on a fixed cadence.
//! Instead of an implicit background interval, the monitor is an
//! explicit poll target: the host calls [`StatusMonitor::poll`] with
//! the current instant whenever its timer fires, and stops calling (or
//! drops the monitor) to cancel. There is no outstanding asynchronous
//! work to abort.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::availability::is_open_at;
use crate::models::Schedule;

/// Result of one status poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    pub open: bool,
    /// True when the status differs from the previous poll. The first
    /// poll always reports a change so the host paints an initial state.
    pub changed: bool,
}

/// Polls open/closed status against an owned schedule snapshot.
#[derive(Debug, Clone)]
pub struct StatusMonitor {
    schedule: Schedule,
    tz: Tz,
    last: Option<bool>,
}

impl StatusMonitor {
    pub fn new(schedule: Schedule, tz: Tz) -> Self {
        Self {
            schedule,
            tz,
            last: None,
        }
    }

    /// Recompute the open flag for `now` and report transitions.
    pub fn poll(&mut self, now: DateTime<Utc>) -> StatusUpdate {
        let open = is_open_at(now, &self.schedule, self.tz);
        let changed = self.last != Some(open);
        self.last = Some(open);
        StatusUpdate { open, changed }
    }

    /// Swap in a fresh schedule snapshot (data refresh). Transition
    /// tracking carries over, so a refresh that flips the status is
    /// reported as a change.
    pub fn replace_schedule(&mut self, schedule: Schedule) {
        self.schedule = schedule;
    }

    /// Switch the active zone (the screen's timezone toggle).
    pub fn set_timezone(&mut self, tz: Tz) {
        self.tz = tz;
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}
