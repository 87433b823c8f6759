use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dekadal_calendar::CalendarDate;

/// Dekad calendar arithmetic for ten-day agro-meteorological periods.
#[derive(Parser)]
#[command(
    name = "dekadal",
    version,
    about = "Dekad calendar arithmetic for ten-day time series periods"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./dekadal.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, `text` or `json`. Overrides `[output].format`.
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the dekad containing each date.
    Check(CheckArgs),
    /// List dekad end dates between two dates.
    Index(IndexArgs),
    /// Print the last day of month of a dekad.
    Day(DayArgs),
    /// Print the dekad period (1..=36) of each date.
    Period(PeriodArgs),
    /// Convert running dekad numbers to end dates.
    Running(RunningArgs),
    /// Group dates by dekad.
    Group(GroupArgs),
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Dates as YYYY-MM-DD[THH:MM[:SS[.mmm]]].
    #[arg(required = true)]
    pub dates: Vec<CalendarDate>,
}

/// Arguments for the `index` subcommand.
#[derive(clap::Args)]
pub struct IndexArgs {
    /// First date of the range.
    pub begin: CalendarDate,

    /// Last date of the range. Defaults to today (or `[clock].today`).
    pub end: Option<CalendarDate>,
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Month (1..=12).
    pub month: u8,

    /// Dekad number within the month (1..=3).
    pub dekad: u8,
}

/// Arguments for the `period` subcommand.
#[derive(clap::Args)]
pub struct PeriodArgs {
    /// Dates as YYYY-MM-DD.
    #[arg(required = true)]
    pub dates: Vec<CalendarDate>,
}

/// Arguments for the `running` subcommand.
#[derive(clap::Args)]
pub struct RunningArgs {
    /// Base year; running number 1 is its first January dekad.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Running dekad numbers (1 and up).
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<i32>,
}

/// Arguments for the `group` subcommand.
#[derive(clap::Args)]
pub struct GroupArgs {
    /// Dates to group.
    pub dates: Vec<CalendarDate>,

    /// Read additional dates from a file, one per line.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Key groups by dekad start date instead of end date.
    #[arg(long)]
    pub start_key: bool,
}
