use std::process::ExitCode;

use serde::Serialize;
use storehours_core::tz::civil_at;
use storehours_core::{TimeSlot, generate_slots};

use crate::cli::SlotsArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{load_schedule, parse_date, parse_tz_or_input_error, resolve_instant};

#[derive(Debug, Serialize)]
struct SlotsResult {
    date: String,
    tz: String,
    slot_minutes: u32,
    slots: Vec<TimeSlot>,
}

pub fn run_slots(args: SlotsArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let tz = parse_tz_or_input_error(&args.tz)?;
    let schedule = load_schedule(&args.schedule)?;

    let date = match &args.date {
        Some(s) => parse_date(s)?,
        None => civil_at(resolve_instant(None)?, tz).date,
    };

    if args.slot_minutes == 0 {
        return Err(CliError::input("slot_minutes must be greater than zero"));
    }

    let slots = generate_slots(date, &schedule, tz, args.slot_minutes);

    match output_format {
        OutputFormat::Json => {
            let result = SlotsResult {
                date: date.format("%Y-%m-%d").to_string(),
                tz: tz.to_string(),
                slot_minutes: args.slot_minutes,
                slots,
            };
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            if slots.is_empty() {
                println!("Store is closed on this date");
            } else {
                for slot in &slots {
                    println!("{} {}", slot.start.format("%H:%M"), slot.display);
                }
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
