//! Next-Opening Finder.
//!
//! Forward-searches day by day for the next closed-to-open transition.
//! The result anchors the host's reminder notification; the finder
//! itself never schedules anything.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

use crate::availability::resolve_operating_intervals;
use crate::models::Schedule;
use crate::tz::{civil_at, civil_to_instant};

/// Default forward-search window.
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// Find the next future opening instant within `horizon_days`.
///
/// Dates are scanned in order starting from `from`'s civil date in
/// `tz`; within a date, intervals in schedule order. On the first day
/// only, candidates at or before `from` are discarded (the store may
/// already have opened earlier today). `None` is a normal result, not
/// an error: the store is closed for the whole window and the caller
/// simply skips scheduling a reminder.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use storehours_core::models::Schedule;
/// use storehours_core::opening::find_next_opening;
/// use storehours_core::tz::parse_tz;
///
/// let tz = parse_tz("America/New_York").unwrap();
/// // Monday 18:00 New York; the fallback schedule opens Tuesday 09:00.
/// let from = DateTime::parse_from_rfc3339("2026-03-02T23:00:00Z").unwrap().into();
/// let next = find_next_opening(from, &Schedule::fallback(), tz, 7).unwrap();
///
/// assert_eq!(next.to_rfc3339(), "2026-03-03T14:00:00+00:00");
/// ```
pub fn find_next_opening(
    from: DateTime<Utc>,
    schedule: &Schedule,
    tz: Tz,
    horizon_days: u32,
) -> Option<DateTime<Utc>> {
    let start_date = civil_at(from, tz).date;

    for offset in 0..horizon_days as i64 {
        let date = start_date + Duration::days(offset);

        for interval in resolve_operating_intervals(date, schedule) {
            let candidate = civil_to_instant(date, interval.start, tz);
            if offset == 0 && candidate <= from {
                continue;
            }
            return Some(candidate);
        }
    }

    None
}

/// Compute the reminder instant for an opening: `opening - lead`.
///
/// Returns `None` when that instant is not strictly in the future, in
/// which case no reminder should be scheduled.
pub fn reminder_at(
    opening: DateTime<Utc>,
    now: DateTime<Utc>,
    lead: Duration,
) -> Option<DateTime<Utc>> {
    let at = opening - lead;
    (at > now).then_some(at)
}
