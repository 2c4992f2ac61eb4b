//! Core data types for storehours.
//!
//! This module defines the schedule data model shared with the fetch
//! collaborator and the value objects derived from it:
//! - [`WeeklyHoursEntry`] - One weekday row of the recurring schedule
//! - [`OverrideEntry`] - A date-specific exception, recurring yearly
//! - [`Schedule`] - Immutable pair of weekly hours and overrides
//! - [`OperatingInterval`] - A half-open `[start, end)` civil time range
//! - [`TimeSlot`] - A bookable fixed-width slot
//! - [`DayPart`] - Greeting bucket for a local hour

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreHoursError};

/// Parse a boundary-contract `"HH:MM"` civil time.
pub fn parse_hhmm(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, hhmm::FORMAT).map_err(|_| {
        StoreHoursError::ParseError(format!("Invalid civil time '{}'. Expected HH:MM", s))
    })
}

/// Serde support for civil times in the boundary `"HH:MM"` shape.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_hhmm(&s).map_err(serde::de::Error::custom)
    }
}

/// Serde support for optional `"HH:MM"` civil times (`null` on closed rows).
pub(crate) mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::hhmm::FORMAT;

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => super::parse_hhmm(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// One row of the weekly recurring schedule.
///
/// `day_of_week` uses `0 = Sunday .. 6 = Saturday`, matching the source
/// data. Multiple entries may exist for the same weekday; each open entry
/// contributes one operating interval. An open entry with a missing
/// `start_time` or `end_time` is malformed and contributes nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyHoursEntry {
    pub day_of_week: u8,
    pub is_open: bool,
    #[serde(default, with = "hhmm_opt")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "hhmm_opt")]
    pub end_time: Option<NaiveTime>,
}

impl WeeklyHoursEntry {
    /// An open entry with the given hours.
    pub fn open(day_of_week: u8, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            day_of_week,
            is_open: true,
            start_time: Some(start),
            end_time: Some(end),
        }
    }

    /// A closed entry; times are never consulted.
    pub fn closed(day_of_week: u8) -> Self {
        Self {
            day_of_week,
            is_open: false,
            start_time: None,
            end_time: None,
        }
    }
}

/// A date-specific exception identified by `(month, day)` in any year.
///
/// An override supersedes the weekly schedule entirely on its date: a
/// closed override closes the store even when weekly hours would say
/// open. At most one override is expected per `(month, day)`; when
/// duplicates occur, the first in input order wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub month: u32,
    pub day: u32,
    pub is_open: bool,
    #[serde(default, with = "hhmm_opt")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "hhmm_opt")]
    pub end_time: Option<NaiveTime>,
}

/// Immutable snapshot of the store's schedule data.
///
/// Replaced wholesale whenever new data arrives; the engine never
/// mutates or caches it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub weekly_hours: Vec<WeeklyHoursEntry>,
    pub overrides: Vec<OverrideEntry>,
}

impl Schedule {
    pub fn new(weekly_hours: Vec<WeeklyHoursEntry>, overrides: Vec<OverrideEntry>) -> Self {
        Self {
            weekly_hours,
            overrides,
        }
    }

    /// The hard-coded schedule substituted when the upstream fetch fails:
    /// Mon-Fri 09:00-17:00, Sat 10:00-16:00, Sun closed, no overrides.
    pub fn fallback() -> Self {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let five_pm = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        let ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        let four_pm = NaiveTime::from_hms_opt(16, 0, 0).unwrap();

        let weekly = (1..=5)
            .map(|day| WeeklyHoursEntry::open(day, nine, five_pm))
            .chain([WeeklyHoursEntry::open(6, ten, four_pm)])
            .chain([WeeklyHoursEntry::closed(0)])
            .collect();

        Self::new(weekly, vec![])
    }
}

/// A half-open `[start, end)` civil time range during which the store
/// is open on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatingInterval {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl OperatingInterval {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Half-open membership: `start <= t < end`.
    pub fn contains(&self, t: NaiveTime) -> bool {
        self.start <= t && t < self.end
    }

    /// A degenerate interval (`start >= end`) contains no instant.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl std::fmt::Display for OperatingInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format(hhmm::FORMAT),
            self.end.format(hhmm::FORMAT)
        )
    }
}

/// A bookable fixed-width slot within an operating interval.
///
/// Equality is by `start` only; the display label and instant are
/// derived presentation data.
#[derive(Debug, Clone, Serialize)]
pub struct TimeSlot {
    /// Slot start as 24-hour civil time.
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// Human 12-hour rendering (e.g. `"9:00 AM"`).
    pub display: String,
    /// The zoned instant for this civil time on the slot's date.
    pub instant: DateTime<Utc>,
}

impl PartialEq for TimeSlot {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
    }
}

impl Eq for TimeSlot {}

/// Greeting bucket for a local wall-clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPart {
    Morning,
    LateMorning,
    Afternoon,
    Evening,
    Night,
}

impl DayPart {
    /// Bucket a local hour (0-23): 5-9 morning, 10-11 late morning,
    /// 12-16 afternoon, 17-20 evening, otherwise night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=9 => DayPart::Morning,
            10..=11 => DayPart::LateMorning,
            12..=16 => DayPart::Afternoon,
            17..=20 => DayPart::Evening,
            _ => DayPart::Night,
        }
    }
}

impl std::fmt::Display for DayPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayPart::Morning => write!(f, "morning"),
            DayPart::LateMorning => write!(f, "late morning"),
            DayPart::Afternoon => write!(f, "afternoon"),
            DayPart::Evening => write!(f, "evening"),
            DayPart::Night => write!(f, "night"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parse_hhmm_accepts_boundary_shape() {
        assert_eq!(parse_hhmm("09:00").unwrap(), t(9, 0));
        assert_eq!(parse_hhmm("23:45").unwrap(), t(23, 45));
        assert!(matches!(
            parse_hhmm("9am"),
            Err(StoreHoursError::ParseError(_))
        ));
        assert!(parse_hhmm("25:00").is_err());
    }

    #[test]
    fn weekly_entry_deserializes_boundary_shape() {
        let entry: WeeklyHoursEntry = serde_json::from_str(
            r#"{"id":"1","day_of_week":1,"is_open":true,"start_time":"09:00","end_time":"17:00"}"#,
        )
        .unwrap();

        assert_eq!(entry.day_of_week, 1);
        assert!(entry.is_open);
        assert_eq!(entry.start_time, Some(t(9, 0)));
        assert_eq!(entry.end_time, Some(t(17, 0)));
    }

    #[test]
    fn closed_entry_deserializes_null_times() {
        let entry: WeeklyHoursEntry = serde_json::from_str(
            r#"{"day_of_week":0,"is_open":false,"start_time":null,"end_time":null}"#,
        )
        .unwrap();

        assert!(!entry.is_open);
        assert_eq!(entry.start_time, None);
        assert_eq!(entry.end_time, None);
    }

    #[test]
    fn override_entry_deserializes() {
        let entry: OverrideEntry = serde_json::from_str(
            r#"{"month":12,"day":25,"is_open":false,"start_time":null,"end_time":null}"#,
        )
        .unwrap();

        assert_eq!((entry.month, entry.day), (12, 25));
        assert!(!entry.is_open);
    }

    #[test]
    fn interval_half_open_membership() {
        let iv = OperatingInterval::new(t(9, 0), t(17, 0));

        assert!(iv.contains(t(9, 0)));
        assert!(iv.contains(t(16, 59)));
        assert!(!iv.contains(t(17, 0)));
        assert!(!iv.contains(t(8, 59)));
    }

    #[test]
    fn degenerate_interval_contains_nothing() {
        let iv = OperatingInterval::new(t(12, 0), t(12, 0));

        assert!(iv.is_empty());
        assert!(!iv.contains(t(12, 0)));
    }

    #[test]
    fn interval_display() {
        let iv = OperatingInterval::new(t(9, 0), t(17, 30));
        assert_eq!(format!("{}", iv), "09:00-17:30");
    }

    #[test]
    fn slot_equality_is_by_start_time() {
        let a = TimeSlot {
            start: t(9, 0),
            display: "9:00 AM".into(),
            instant: DateTime::parse_from_rfc3339("2026-03-02T14:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let b = TimeSlot {
            start: t(9, 0),
            display: "different label".into(),
            instant: DateTime::parse_from_rfc3339("2026-06-01T13:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        assert_eq!(a, b);
    }

    #[test]
    fn fallback_schedule_shape() {
        let schedule = Schedule::fallback();

        assert_eq!(schedule.weekly_hours.len(), 7);
        assert!(schedule.overrides.is_empty());

        let sunday = schedule
            .weekly_hours
            .iter()
            .find(|e| e.day_of_week == 0)
            .unwrap();
        assert!(!sunday.is_open);

        let saturday = schedule
            .weekly_hours
            .iter()
            .find(|e| e.day_of_week == 6)
            .unwrap();
        assert_eq!(saturday.start_time, Some(t(10, 0)));
        assert_eq!(saturday.end_time, Some(t(16, 0)));
    }

    #[test]
    fn day_part_buckets() {
        assert_eq!(DayPart::from_hour(5), DayPart::Morning);
        assert_eq!(DayPart::from_hour(9), DayPart::Morning);
        assert_eq!(DayPart::from_hour(10), DayPart::LateMorning);
        assert_eq!(DayPart::from_hour(11), DayPart::LateMorning);
        assert_eq!(DayPart::from_hour(12), DayPart::Afternoon);
        assert_eq!(DayPart::from_hour(16), DayPart::Afternoon);
        assert_eq!(DayPart::from_hour(17), DayPart::Evening);
        assert_eq!(DayPart::from_hour(20), DayPart::Evening);
        assert_eq!(DayPart::from_hour(21), DayPart::Night);
        assert_eq!(DayPart::from_hour(4), DayPart::Night);
    }

    #[test]
    fn day_part_display() {
        assert_eq!(format!("{}", DayPart::LateMorning), "late morning");
        assert_eq!(format!("{}", DayPart::Night), "night");
    }

    #[test]
    fn slot_serializes_hhmm_start() {
        let slot = TimeSlot {
            start: t(9, 15),
            display: "9:15 AM".into(),
            instant: DateTime::parse_from_rfc3339("2026-03-02T14:15:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let json = serde_json::to_value(&slot).unwrap();

        assert_eq!(json["start"], "09:15");
        assert_eq!(json["display"], "9:15 AM");
    }
}
