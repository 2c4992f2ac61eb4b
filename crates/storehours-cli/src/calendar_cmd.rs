use std::process::ExitCode;

use serde::Serialize;
use storehours_core::tz::upcoming_dates;
use storehours_core::{OperatingInterval, resolve_operating_intervals};

use crate::cli::CalendarArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{load_schedule, parse_tz_or_input_error, resolve_instant};

#[derive(Debug, Serialize)]
struct CalendarDay {
    date: String,
    weekday: String,
    open: bool,
    intervals: Vec<OperatingInterval>,
}

pub fn run_calendar(args: CalendarArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let tz = parse_tz_or_input_error(&args.tz)?;
    let schedule = load_schedule(&args.schedule)?;
    let from = resolve_instant(args.at.as_deref())?;

    let days: Vec<CalendarDay> = upcoming_dates(from, tz, args.days)
        .into_iter()
        .map(|date| {
            let intervals = resolve_operating_intervals(date, &schedule);
            CalendarDay {
                date: date.format("%Y-%m-%d").to_string(),
                weekday: date.format("%a").to_string(),
                open: intervals.iter().any(|iv| !iv.is_empty()),
                intervals,
            }
        })
        .collect();

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&days)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for day in &days {
                if day.open {
                    let hours: Vec<String> =
                        day.intervals.iter().map(|iv| iv.to_string()).collect();
                    println!("{} {} open {}", day.date, day.weekday, hours.join(", "));
                } else {
                    println!("{} {} closed", day.date, day.weekday);
                }
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
