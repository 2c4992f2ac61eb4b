//! Slot Generator.
//!
//! Expands a date's operating intervals into fixed-width bookable
//! slots. The walk is half-open: a slot starting exactly at
//! `end - width` is the last one emitted, and nothing at or past `end`
//! is emitted, not even a fractional partial slot.

use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;

use crate::availability::resolve_operating_intervals;
use crate::models::{Schedule, TimeSlot};
use crate::tz::{civil_to_instant, format_12h};

/// Default slot width offered by the booking screen.
pub const DEFAULT_SLOT_MINUTES: u32 = 15;

/// Generate the bookable slots for a civil date.
///
/// Slots are emitted per interval in schedule order, ascending in time
/// within each interval. Overlapping intervals are not merged, so
/// overlapping weekly entries produce duplicate slots; that mirrors the
/// upstream data contract rather than silently fixing it. An empty
/// result means the store is closed on that date.
///
/// A `slot_minutes` of zero yields no slots.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use storehours_core::models::Schedule;
/// use storehours_core::slots::{DEFAULT_SLOT_MINUTES, generate_slots};
/// use storehours_core::tz::parse_tz;
///
/// let tz = parse_tz("America/New_York").unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(); // a Monday
/// let slots = generate_slots(date, &Schedule::fallback(), tz, DEFAULT_SLOT_MINUTES);
///
/// assert_eq!(slots.len(), 32);
/// assert_eq!(slots[0].display, "9:00 AM");
/// assert_eq!(slots[31].display, "4:45 PM");
/// ```
pub fn generate_slots(
    date: NaiveDate,
    schedule: &Schedule,
    tz: Tz,
    slot_minutes: u32,
) -> Vec<TimeSlot> {
    if slot_minutes == 0 {
        return vec![];
    }
    let step = Duration::minutes(slot_minutes as i64);

    let mut slots = Vec::new();
    for interval in resolve_operating_intervals(date, schedule) {
        let mut current = interval.start;
        while current < interval.end {
            slots.push(TimeSlot {
                start: current,
                display: format_12h(current),
                instant: civil_to_instant(date, current, tz),
            });

            // NaiveTime arithmetic wraps at midnight; a wrapped step has
            // left the interval.
            let (next, wrapped) = current.overflowing_add_signed(step);
            if wrapped != 0 {
                break;
            }
            current = next;
        }
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OverrideEntry, WeeklyHoursEntry};
    use crate::tz::parse_tz;
    use chrono::{DateTime, NaiveTime, Utc};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn new_york() -> Tz {
        parse_tz("America/New_York").unwrap()
    }

    fn monday_only() -> Schedule {
        Schedule::new(vec![WeeklyHoursEntry::open(1, t(9, 0), t(17, 0))], vec![])
    }

    #[test]
    fn full_day_yields_32_quarter_hour_slots() {
        let slots = generate_slots(d(2026, 3, 2), &monday_only(), new_york(), 15);

        assert_eq!(slots.len(), 32);
        assert_eq!(slots[0].start, t(9, 0));
        assert_eq!(slots[0].display, "9:00 AM");
        assert_eq!(slots[31].start, t(16, 45));
        assert_eq!(slots[31].display, "4:45 PM");
        assert!(slots.iter().all(|s| s.start < t(17, 0)));
    }

    #[test]
    fn slot_instants_are_zone_resolved() {
        let slots = generate_slots(d(2026, 3, 2), &monday_only(), new_york(), 15);

        // 09:00 New York on 2026-03-02 is EST (UTC-5).
        assert_eq!(slots[0].instant, ts("2026-03-02T14:00:00Z"));
        assert_eq!(slots[1].instant, ts("2026-03-02T14:15:00Z"));
    }

    #[test]
    fn closed_date_yields_no_slots() {
        // 2026-03-03 is a Tuesday, closed in the fixture.
        let slots = generate_slots(d(2026, 3, 3), &monday_only(), new_york(), 15);
        assert!(slots.is_empty());
    }

    #[test]
    fn fractional_tail_is_dropped() {
        // [09:00, 09:40) at 15 minutes: 09:30 is the last start
        // strictly below the end; no partial slot at 09:45.
        let schedule = Schedule::new(vec![WeeklyHoursEntry::open(1, t(9, 0), t(9, 40))], vec![]);
        let slots = generate_slots(d(2026, 3, 2), &schedule, new_york(), 15);

        let starts: Vec<_> = slots.iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![t(9, 0), t(9, 15), t(9, 30)]);
    }

    #[test]
    fn overlapping_entries_preserve_duplicates() {
        let schedule = Schedule::new(
            vec![
                WeeklyHoursEntry::open(1, t(9, 0), t(10, 0)),
                WeeklyHoursEntry::open(1, t(9, 30), t(10, 30)),
            ],
            vec![],
        );
        let slots = generate_slots(d(2026, 3, 2), &schedule, new_york(), 30);

        let starts: Vec<_> = slots.iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![t(9, 0), t(9, 30), t(9, 30), t(10, 0)]);
    }

    #[test]
    fn open_override_drives_slot_window() {
        let mut schedule = monday_only();
        schedule.overrides.push(OverrideEntry {
            month: 3,
            day: 2,
            is_open: true,
            start_time: Some(t(12, 0)),
            end_time: Some(t(13, 0)),
        });

        let slots = generate_slots(d(2026, 3, 2), &schedule, new_york(), 15);
        let starts: Vec<_> = slots.iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![t(12, 0), t(12, 15), t(12, 30), t(12, 45)]);
    }

    #[test]
    fn zero_width_override_yields_no_slots() {
        let schedule = Schedule::new(
            vec![],
            vec![OverrideEntry {
                month: 3,
                day: 2,
                is_open: true,
                start_time: Some(t(12, 0)),
                end_time: Some(t(12, 0)),
            }],
        );

        assert!(generate_slots(d(2026, 3, 2), &schedule, new_york(), 15).is_empty());
    }

    #[test]
    fn zero_width_step_yields_no_slots() {
        assert!(generate_slots(d(2026, 3, 2), &monday_only(), new_york(), 0).is_empty());
    }

    #[test]
    fn interval_ending_at_midnight_terminates() {
        let schedule = Schedule::new(
            vec![WeeklyHoursEntry::open(1, t(23, 0), t(23, 59))],
            vec![],
        );
        let slots = generate_slots(d(2026, 3, 2), &schedule, new_york(), 15);

        let starts: Vec<_> = slots.iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![t(23, 0), t(23, 15), t(23, 30), t(23, 45)]);
    }

    #[test]
    fn dst_spring_forward_slots_resolve() {
        // 2026-03-08 is the US spring-forward Sunday; open across the gap.
        let schedule = Schedule::new(vec![WeeklyHoursEntry::open(0, t(1, 0), t(4, 0))], vec![]);
        let slots = generate_slots(d(2026, 3, 8), &schedule, new_york(), 60);

        assert_eq!(slots.len(), 3);
        // 01:00 EST = 06:00Z; the nonexistent 02:00 resolves without panic.
        assert_eq!(slots[0].instant, ts("2026-03-08T06:00:00Z"));
        assert!(slots[1].instant > slots[0].instant);
    }
}
