use std::process::ExitCode;

use serde::Serialize;
use storehours_core::models::DayPart;
use storehours_core::tz::{city_label, civil_at, format_rfc3339, format_rfc3339_utc};
use storehours_core::is_open_at;

use crate::cli::StatusArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{load_schedule, parse_tz_or_input_error, resolve_instant};

#[derive(Debug, Serialize)]
struct StatusResult {
    open: bool,
    tz: String,
    checked_at: String,
    local_time: String,
    day_part: DayPart,
    greeting: String,
}

pub fn run_status(args: StatusArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let tz = parse_tz_or_input_error(&args.tz)?;
    let schedule = load_schedule(&args.schedule)?;
    let now = resolve_instant(args.at.as_deref())?;

    let open = is_open_at(now, &schedule, tz);
    let result = status_result(open, now, tz);

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result).map_err(|e| {
                crate::error::CliError::runtime(format!("Failed to serialize JSON: {}", e))
            })?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Store is {} now", if open { "Open" } else { "Closed" });
            println!("{}", result.greeting);
            println!("Local time: {} ({})", result.local_time, result.tz);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn status_result(open: bool, now: chrono::DateTime<chrono::Utc>, tz: chrono_tz::Tz) -> StatusResult {
    use chrono::Timelike;

    let civil = civil_at(now, tz);
    let day_part = DayPart::from_hour(civil.time.hour());
    let city = city_label(tz);

    StatusResult {
        open,
        tz: tz.to_string(),
        checked_at: format_rfc3339_utc(&now),
        local_time: format_rfc3339(&now.with_timezone(&tz)),
        day_part,
        greeting: greeting_line(day_part, &city),
    }
}

fn greeting_line(part: DayPart, city: &str) -> String {
    match part {
        DayPart::Morning => format!("Good Morning, {}!", city),
        DayPart::LateMorning => format!("Late Morning Vibes! {}", city),
        DayPart::Afternoon => format!("Good Afternoon, {}!", city),
        DayPart::Evening => format!("Good Evening, {}!", city),
        DayPart::Night => format!("Night Owl in {}!", city),
    }
}
