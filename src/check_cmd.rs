use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use dekadal_calendar::CalendarDate;
use dekadal_dekad::{Dekad, map_dates};

use crate::cli::CheckArgs;
use crate::output::{OutputFormat, Report, write_report};

/// Dekad placement of one input date.
#[derive(Debug, Serialize, PartialEq)]
pub struct CheckRow {
    pub date: CalendarDate,
    pub dekad: u8,
    pub start: CalendarDate,
    pub end: CalendarDate,
    pub period: u8,
}

impl CheckRow {
    fn from_date(date: CalendarDate) -> Self {
        let dekad = Dekad::from_date(date);
        Self {
            date,
            dekad: dekad.number(),
            start: dekad.start_date(),
            end: dekad.end_date(),
            period: dekad.period(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct CheckReport(Vec<CheckRow>);

impl Report for CheckReport {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for row in &self.0 {
            writeln!(
                out,
                "{}\tD{}\t{}\t{}\tperiod {}",
                row.date, row.dekad, row.start, row.end, row.period
            )?;
        }
        Ok(())
    }
}

pub fn run(args: &CheckArgs, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let _span = tracing::info_span!("check").entered();
    info!(n_dates = args.dates.len(), "placing dates in dekads");

    let rows = map_dates(&args.dates, CheckRow::from_date);
    write_report(out, format, &CheckReport(rows))
}
