use std::process::ExitCode;

use chrono::Duration;
use serde::Serialize;
use storehours_core::tz::{format_12h, format_rfc3339, format_rfc3339_utc};
use storehours_core::{find_next_opening, reminder_at};

use crate::cli::NextOpeningArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{load_schedule, parse_tz_or_input_error, resolve_instant};

#[derive(Debug, Serialize)]
struct NextOpeningResult {
    tz: String,
    searched_from: String,
    horizon_days: u32,
    /// UTC instant of the next opening; null when none within the horizon.
    next_opening: Option<String>,
    next_opening_local: Option<String>,
    /// When to remind, `remind_minutes` before the opening; null when the
    /// reminder instant has already passed or there is no opening.
    reminder_at: Option<String>,
}

pub fn run_next_opening(args: NextOpeningArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let tz = parse_tz_or_input_error(&args.tz)?;
    let schedule = load_schedule(&args.schedule)?;
    let from = resolve_instant(args.at.as_deref())?;

    let next = find_next_opening(from, &schedule, tz, args.horizon_days);
    let reminder = next.and_then(|opening| {
        reminder_at(opening, from, Duration::minutes(args.remind_minutes))
    });

    match output_format {
        OutputFormat::Json => {
            let result = NextOpeningResult {
                tz: tz.to_string(),
                searched_from: format_rfc3339_utc(&from),
                horizon_days: args.horizon_days,
                next_opening: next.map(|dt| format_rfc3339_utc(&dt)),
                next_opening_local: next.map(|dt| format_rfc3339(&dt.with_timezone(&tz))),
                reminder_at: reminder.map(|dt| format_rfc3339_utc(&dt)),
            };
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => match next {
            Some(opening) => {
                let local = opening.with_timezone(&tz);
                println!(
                    "Next opening: {} ({})",
                    format_rfc3339(&local),
                    format_12h(local.time())
                );
                match reminder {
                    Some(at) => println!("Reminder at: {}", format_rfc3339_utc(&at)),
                    None => println!("Reminder window already passed"),
                }
            }
            None => {
                // A quiet horizon is a normal outcome, not an error.
                println!("No opening found within {} days", args.horizon_days);
            }
        },
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
