use clap::{Parser, Subcommand};

/// Timezone-aware store-hours availability tool
#[derive(Parser, Debug)]
#[command(name = "storehours")]
#[command(about = "Timezone-aware store-hours availability tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report whether the store is open at an instant
    Status(StatusArgs),
    /// List bookable time slots for a date
    Slots(SlotsArgs),
    /// Find the next future opening instant
    NextOpening(NextOpeningArgs),
    /// Show open/closed hours for the upcoming dates
    Calendar(CalendarArgs),
    /// Poll open status on a fixed cadence
    Watch(WatchArgs),
}

#[derive(clap::Args, Debug)]
pub struct ScheduleArgs {
    /// Weekly hours JSON file (built-in fallback hours when omitted)
    #[arg(long)]
    pub hours: Option<String>,

    /// Overrides JSON file (no overrides when omitted)
    #[arg(long)]
    pub overrides: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    /// IANA timezone (e.g., America/New_York)
    #[arg(short, long, default_value = "America/New_York")]
    pub tz: String,

    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Instant to evaluate (RFC3339); defaults to now
    #[arg(long)]
    pub at: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct SlotsArgs {
    /// IANA timezone
    #[arg(short, long, default_value = "America/New_York")]
    pub tz: String,

    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Date to expand (YYYY-MM-DD); defaults to today in the zone
    #[arg(short, long)]
    pub date: Option<String>,

    /// Slot width in minutes
    #[arg(long, default_value_t = 15)]
    pub slot_minutes: u32,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct NextOpeningArgs {
    /// IANA timezone
    #[arg(short, long, default_value = "America/New_York")]
    pub tz: String,

    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Search from this instant (RFC3339); defaults to now
    #[arg(long)]
    pub at: Option<String>,

    /// Forward-search window in days
    #[arg(long, default_value_t = 7)]
    pub horizon_days: u32,

    /// Reminder lead time in minutes before the opening
    #[arg(long, default_value_t = 60)]
    pub remind_minutes: i64,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct CalendarArgs {
    /// IANA timezone
    #[arg(short, long, default_value = "America/New_York")]
    pub tz: String,

    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Start from this instant (RFC3339); defaults to now
    #[arg(long)]
    pub at: Option<String>,

    /// Number of upcoming dates to show
    #[arg(long, default_value_t = 30)]
    pub days: u32,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct WatchArgs {
    /// IANA timezone
    #[arg(short, long, default_value = "America/New_York")]
    pub tz: String,

    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Poll cadence in seconds
    #[arg(long, default_value_t = 60)]
    pub interval_secs: u64,

    /// Number of polls to perform (0 = until interrupted)
    #[arg(long, default_value_t = 0)]
    pub iterations: u64,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
