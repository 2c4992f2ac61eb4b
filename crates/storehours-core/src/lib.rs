//! # storehours-core
//!
//! A timezone-aware store-hours availability engine.
//!
//! Given a weekly recurring schedule, a set of date-specific overrides,
//! and a target IANA timezone, this library decides whether the store is
//! open at an instant, expands a date's operating hours into fixed-width
//! bookable slots, and finds the next future opening instant.
//!
//! ## Semantics
//!
//! - **Override precedence**: a `(month, day)` override supersedes the
//!   weekly hours for that date entirely, recurring every year.
//! - **Half-open intervals**: open at exactly `start`, closed at exactly
//!   `end`; a slot starting at `end - width` is the last one offered.
//! - **Pure and stateless**: every operation is a deterministic function
//!   of its inputs; the [`models::Schedule`] snapshot is never mutated
//!   or cached.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{DateTime, NaiveDate};
//! use storehours_core::prelude::*;
//!
//! let tz = parse_tz("America/New_York").unwrap();
//! let schedule = Schedule::fallback();
//!
//! // Monday 2026-03-02 10:00 New York = 15:00Z: open.
//! let now = DateTime::parse_from_rfc3339("2026-03-02T15:00:00Z").unwrap().into();
//! assert!(is_open_at(now, &schedule, tz));
//!
//! // 32 quarter-hour slots between 09:00 and 17:00.
//! let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
//! let slots = generate_slots(date, &schedule, tz, DEFAULT_SLOT_MINUTES);
//! assert_eq!(slots.len(), 32);
//! ```

pub mod availability;
pub mod error;
pub mod models;
pub mod monitor;
pub mod opening;
pub mod slots;
pub mod tz;

// Re-export commonly used items at the crate root
pub use availability::{is_open_at, is_open_on, resolve_operating_intervals};
pub use error::{Result, StoreHoursError};
pub use models::{
    DayPart, OperatingInterval, OverrideEntry, Schedule, TimeSlot, WeeklyHoursEntry,
};
pub use monitor::{StatusMonitor, StatusUpdate};
pub use opening::{DEFAULT_HORIZON_DAYS, find_next_opening, reminder_at};
pub use slots::{DEFAULT_SLOT_MINUTES, generate_slots};
pub use tz::{CivilDateTime, civil_at, civil_to_instant, parse_tz};

/// Prelude module for convenient imports.
///
/// ```
/// use storehours_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::availability::{is_open_at, is_open_on, resolve_operating_intervals};
    pub use crate::error::{Result, StoreHoursError};
    pub use crate::models::*;
    pub use crate::monitor::{StatusMonitor, StatusUpdate};
    pub use crate::opening::{DEFAULT_HORIZON_DAYS, find_next_opening, reminder_at};
    pub use crate::slots::{DEFAULT_SLOT_MINUTES, generate_slots};
    pub use crate::tz::{CivilDateTime, city_label, civil_at, civil_to_instant, parse_tz};
}
