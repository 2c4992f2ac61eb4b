use std::fs;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use storehours_core::{OverrideEntry, Schedule, WeeklyHoursEntry};

use crate::cli::ScheduleArgs;
use crate::error::{CliError, CliResult};

pub fn parse_tz_or_input_error(name: &str) -> CliResult<Tz> {
    storehours_core::tz::parse_tz(name)
        .map_err(|e| CliError::input(format!("Invalid timezone '{}': {}", name, e)))
}

pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        CliError::input(format!("Invalid date '{}': {}. Expected YYYY-MM-DD", s, e))
    })
}

/// Resolve the evaluation instant: an explicit RFC3339 value, or now.
pub fn resolve_instant(at: Option<&str>) -> CliResult<DateTime<Utc>> {
    match at {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| CliError::input(format!("Invalid RFC3339 instant '{}': {}", s, e))),
        None => Ok(Utc::now()),
    }
}

/// Load the schedule snapshot from the given JSON files.
///
/// Missing hours fall back to the built-in weekly table; missing
/// overrides mean none. The files carry the upstream boundary shapes:
/// an array of weekly-hours rows and an array of override rows.
pub fn load_schedule(args: &ScheduleArgs) -> CliResult<Schedule> {
    let weekly_hours = match &args.hours {
        Some(path) => read_json::<Vec<WeeklyHoursEntry>>(path)?,
        None => Schedule::fallback().weekly_hours,
    };

    let overrides = match &args.overrides {
        Some(path) => read_json::<Vec<OverrideEntry>>(path)?,
        None => vec![],
    };

    Ok(Schedule::new(weekly_hours, overrides))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> CliResult<T> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CliError::runtime(format!("Failed to open file '{}': {}", path, e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| CliError::input(format!("Invalid schedule JSON in '{}': {}", path, e)))
}
