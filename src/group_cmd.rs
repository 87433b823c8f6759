use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::info;

use dekadal_calendar::CalendarDate;
use dekadal_dekad::{GroupKey, group_into_dekads};

use crate::cli::GroupArgs;
use crate::output::{OutputFormat, Report, write_report};

#[derive(Debug, Serialize)]
struct GroupRow {
    key: CalendarDate,
    dates: Vec<CalendarDate>,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct GroupReport(Vec<GroupRow>);

impl Report for GroupReport {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for row in &self.0 {
            write!(out, "{} ({}):", row.key, row.dates.len())?;
            for date in &row.dates {
                write!(out, " {date}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Reads one date per line. Blank lines and `#` comments are skipped.
fn read_dates(path: &Path) -> Result<Vec<CalendarDate>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dates file: {}", path.display()))?;
    let mut dates = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let date: CalendarDate = line
            .parse()
            .with_context(|| format!("{}:{}: invalid date", path.display(), i + 1))?;
        dates.push(date);
    }
    Ok(dates)
}

pub fn run(
    args: &GroupArgs,
    config_key: GroupKey,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let _span = tracing::info_span!("group").entered();

    let mut dates = args.dates.clone();
    if let Some(path) = &args.input {
        let from_file = read_dates(path)?;
        info!(path = %path.display(), n_dates = from_file.len(), "dates read");
        dates.extend(from_file);
    }
    if dates.is_empty() {
        bail!("no dates to group: pass dates or --input");
    }

    let key = if args.start_key {
        GroupKey::StartDate
    } else {
        config_key
    };
    let groups = group_into_dekads(&dates, key);
    info!(n_dates = dates.len(), n_groups = groups.len(), ?key, "dates grouped");

    let rows = groups
        .into_iter()
        .map(|(key, dates)| GroupRow { key, dates })
        .collect();
    write_report(out, format, &GroupReport(rows))
}
