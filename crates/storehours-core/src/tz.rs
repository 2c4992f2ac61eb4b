//! Time Zone Resolver.
//!
//! This module converts between absolute instants and civil (wall-clock)
//! date/times in a named IANA zone, with proper DST handling. It holds
//! no state; every function is pure and total over parsed inputs.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, StoreHoursError};

/// An instant rendered as civil time in some zone.
///
/// `day_of_week` follows `0 = Sunday .. 6 = Saturday` to match the
/// schedule data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDateTime {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub day_of_week: u8,
}

/// Parse an IANA timezone name into a [`chrono_tz::Tz`].
///
/// # Examples
///
/// ```
/// use storehours_core::tz::parse_tz;
///
/// let tz = parse_tz("America/New_York").unwrap();
/// assert_eq!(tz.to_string(), "America/New_York");
/// assert!(parse_tz("Not/A_Zone").is_err());
/// ```
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| StoreHoursError::InvalidTimezone(name.to_string()))
}

/// Convert an instant to civil date/time in the given zone.
pub fn civil_at(instant: DateTime<Utc>, tz: Tz) -> CivilDateTime {
    let local = instant.with_timezone(&tz);
    CivilDateTime {
        date: local.date_naive(),
        time: local.time(),
        day_of_week: local.weekday().num_days_from_sunday() as u8,
    }
}

/// Convert a civil date and time in a zone to the corresponding instant.
///
/// Ambiguous local times (DST fall back) resolve to the first
/// occurrence. Nonexistent local times (DST spring forward) resolve to
/// the earliest valid reading chrono-tz offers, so slot boundaries on
/// transition days never panic.
pub fn civil_to_instant(date: NaiveDate, time: NaiveTime, tz: Tz) -> DateTime<Utc> {
    let local = date.and_time(time);
    if let Some(dt) = tz.from_local_datetime(&local).single() {
        return dt.with_timezone(&Utc);
    }
    // Ambiguous: first occurrence.
    if let Some(dt) = tz.from_local_datetime(&local).earliest() {
        return dt.with_timezone(&Utc);
    }
    // Nonexistent, inside a DST gap: probe forward to the earliest valid
    // wall-clock reading. Gaps are at most a couple of hours.
    let mut probe = local;
    for _ in 0..12 {
        probe += chrono::Duration::minutes(15);
        if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
            return dt.with_timezone(&Utc);
        }
    }
    // Unreachable for real zones; reinterpret the wall clock as UTC.
    local.and_utc()
}

/// Enumerate `count` civil dates starting from `from`'s date in `tz`.
///
/// This backs the host's date picker, which shows the next 30 days.
pub fn upcoming_dates(from: DateTime<Utc>, tz: Tz, count: u32) -> Vec<NaiveDate> {
    let start = civil_at(from, tz).date;
    (0..count as i64)
        .map(|offset| start + chrono::Duration::days(offset))
        .collect()
}

/// Derive a human city label from an IANA zone id.
///
/// `"America/New_York"` becomes `"New York"`; ids without a slash are
/// returned as-is.
pub fn city_label(tz: Tz) -> String {
    let name = tz.name();
    name.rsplit('/').next().unwrap_or(name).replace('_', " ")
}

/// Format a civil time in human 12-hour form (e.g. `"9:00 AM"`).
pub fn format_12h(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Format a datetime as RFC3339 with timezone offset.
pub fn format_rfc3339<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Format a UTC datetime as RFC3339 with Z suffix.
pub fn format_rfc3339_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
