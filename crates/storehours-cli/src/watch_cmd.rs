use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use storehours_core::StatusMonitor;
use storehours_core::tz::format_rfc3339_utc;

use crate::cli::WatchArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{load_schedule, parse_tz_or_input_error};

#[derive(Debug, Serialize)]
struct WatchLine {
    at: String,
    open: bool,
    changed: bool,
}

/// Drive the cooperative status monitor: one poll per interval, one
/// output line per poll. Stopping the loop is the cancellation story;
/// there is no background work to abort.
pub fn run_watch(args: WatchArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let tz = parse_tz_or_input_error(&args.tz)?;
    let schedule = load_schedule(&args.schedule)?;

    if args.interval_secs == 0 {
        return Err(CliError::input("interval_secs must be greater than zero"));
    }

    let mut monitor = StatusMonitor::new(schedule, tz);
    let mut polls: u64 = 0;

    loop {
        let now = Utc::now();
        let update = monitor.poll(now);
        let line = WatchLine {
            at: format_rfc3339_utc(&now),
            open: update.open,
            changed: update.changed,
        };

        match output_format {
            OutputFormat::Json => {
                let json = serde_json::to_string(&line)
                    .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
                println!("{}", json);
            }
            OutputFormat::Text => {
                let status = if line.open { "Open" } else { "Closed" };
                let marker = if line.changed { " *" } else { "" };
                println!("{} {}{}", line.at, status, marker);
            }
        }

        polls += 1;
        if args.iterations != 0 && polls >= args.iterations {
            break;
        }
        thread::sleep(Duration::from_secs(args.interval_secs));
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
