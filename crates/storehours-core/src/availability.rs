//! Availability Evaluator.
//!
//! This module decides open/closed for a given instant or civil date,
//! applying override-over-weekly precedence:
//!
//! 1. A closed override closes the whole day, regardless of weekly hours.
//! 2. An open override contributes its single interval and the weekly
//!    hours are ignored entirely.
//! 3. Otherwise every open weekly entry matching the weekday contributes
//!    one interval, in schedule order.
//!
//! Open entries missing a start or end time are malformed and are
//! skipped rather than failing the whole schedule.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::models::{OperatingInterval, Schedule};
use crate::tz::civil_at;

/// Resolve the operating intervals for a civil date.
///
/// The date is already a wall-clock date in the caller's chosen zone;
/// override matching is by `(month, day)` and recurs every year. The
/// result may be empty (closed all day) and may contain a degenerate
/// zero-width interval when an open override has `start == end`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use storehours_core::availability::resolve_operating_intervals;
/// use storehours_core::models::Schedule;
///
/// // 2026-03-02 is a Monday; the fallback schedule opens 09:00-17:00.
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let intervals = resolve_operating_intervals(date, &Schedule::fallback());
///
/// assert_eq!(intervals.len(), 1);
/// assert_eq!(format!("{}", intervals[0]), "09:00-17:00");
/// ```
pub fn resolve_operating_intervals(date: NaiveDate, schedule: &Schedule) -> Vec<OperatingInterval> {
    let month = date.month();
    let day = date.day();

    // First matching override wins; later duplicates are unreachable.
    if let Some(ovr) = schedule
        .overrides
        .iter()
        .find(|o| o.month == month && o.day == day)
    {
        if !ovr.is_open {
            return vec![];
        }
        return match (ovr.start_time, ovr.end_time) {
            (Some(start), Some(end)) => vec![OperatingInterval::new(start, end)],
            _ => vec![],
        };
    }

    let day_of_week = date.weekday().num_days_from_sunday() as u8;
    schedule
        .weekly_hours
        .iter()
        .filter(|e| e.day_of_week == day_of_week && e.is_open)
        .filter_map(|e| match (e.start_time, e.end_time) {
            (Some(start), Some(end)) => Some(OperatingInterval::new(start, end)),
            _ => None,
        })
        .collect()
}

/// Is the store open at this instant, evaluated in `tz`?
///
/// Membership is half-open: the store is open at exactly `start` and
/// closed at exactly `end`.
pub fn is_open_at(instant: DateTime<Utc>, schedule: &Schedule, tz: Tz) -> bool {
    let civil = civil_at(instant, tz);
    resolve_operating_intervals(civil.date, schedule)
        .iter()
        .any(|iv| iv.contains(civil.time))
}

/// Does the store open at all on this civil date?
///
/// Degenerate zero-width intervals do not count; an "open" override
/// with no usable hours reads as closed here.
pub fn is_open_on(date: NaiveDate, schedule: &Schedule) -> bool {
    resolve_operating_intervals(date, schedule)
        .iter()
        .any(|iv| !iv.is_empty())
}
