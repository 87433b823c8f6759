//! Pure conversion functions: TOML config strings -> crate API types.

use anyhow::{Result, bail};

use dekadal_dekad::{Clock, FixedClock, GroupKey, SystemClock};

use crate::config::ClockToml;
use crate::output::OutputFormat;

/// Parses an output format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Parses a group key name into the corresponding enum variant.
pub fn parse_group_key(s: &str) -> Result<GroupKey> {
    match s.to_lowercase().as_str() {
        "end" | "end_date" | "enddate" => Ok(GroupKey::EndDate),
        "start" | "start_date" | "startdate" => Ok(GroupKey::StartDate),
        other => bail!("unknown group key: {other:?} (expected \"end\" or \"start\")"),
    }
}

/// Builds the clock: pinned when `[clock].today` is set, the system clock otherwise.
pub fn build_clock(clock: &ClockToml) -> Box<dyn Clock> {
    match clock.today {
        Some(today) => Box::new(FixedClock(today)),
        None => Box::new(SystemClock),
    }
}
