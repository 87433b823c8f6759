//! `day`, `period` and `running` subcommands: conversions between dekads and
//! their ordinal numbers.

use std::io::Write;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, warn};

use dekadal_calendar::CalendarDate;
use dekadal_dekad::{dekad_to_day, get_dekad_period, running_dekad_to_date_batch};

use crate::cli::{DayArgs, PeriodArgs, RunningArgs};
use crate::output::{OutputFormat, Report, write_report};

#[derive(Debug, Serialize)]
struct DayReport {
    year: i32,
    month: u8,
    dekad: u8,
    day: u8,
}

impl Report for DayReport {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.day)
    }
}

pub fn run_day(args: &DayArgs, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let day = dekad_to_day(args.year, args.month, args.dekad).with_context(|| {
        format!(
            "no dekad {} in {}-{:02}",
            args.dekad, args.year, args.month
        )
    })?;
    let report = DayReport {
        year: args.year,
        month: args.month,
        dekad: args.dekad,
        day,
    };
    write_report(out, format, &report)
}

#[derive(Debug, Serialize)]
struct PeriodRow {
    date: CalendarDate,
    period: u8,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct PeriodReport(Vec<PeriodRow>);

impl Report for PeriodReport {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for row in &self.0 {
            writeln!(out, "{}\t{}", row.date, row.period)?;
        }
        Ok(())
    }
}

pub fn run_period(args: &PeriodArgs, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let _span = tracing::info_span!("period").entered();
    let periods = get_dekad_period(&args.dates);
    info!(n_dates = periods.len(), "dekad periods computed");

    let rows = args
        .dates
        .iter()
        .zip(periods)
        .map(|(&date, period)| PeriodRow { date, period })
        .collect();
    write_report(out, format, &PeriodReport(rows))
}

#[derive(Debug, Serialize)]
struct RunningRow {
    running: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<CalendarDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct RunningReport {
    year: i32,
    dekads: Vec<RunningRow>,
}

impl Report for RunningReport {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for row in &self.dekads {
            match (&row.end, &row.error) {
                (Some(end), _) => writeln!(out, "{}\t{end}", row.running)?,
                (None, Some(error)) => writeln!(out, "{}\terror: {error}", row.running)?,
                (None, None) => writeln!(out, "{}", row.running)?,
            }
        }
        Ok(())
    }
}

/// Converts every running number, reporting failures per element.
///
/// The whole report is written before an error is returned for any
/// number that could not be converted.
pub fn run_running(args: &RunningArgs, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let _span = tracing::info_span!("running", year = args.year).entered();
    let results = running_dekad_to_date_batch(args.year, &args.numbers);

    let mut n_failed = 0usize;
    let rows = args
        .numbers
        .iter()
        .zip(results)
        .map(|(&running, result)| match result {
            Ok(end) => RunningRow {
                running,
                end: Some(end),
                error: None,
            },
            Err(e) => {
                warn!(running, error = %e, "running dekad rejected");
                n_failed += 1;
                RunningRow {
                    running,
                    end: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();
    info!(n_numbers = args.numbers.len(), n_failed, "running dekads converted");

    let report = RunningReport {
        year: args.year,
        dekads: rows,
    };
    write_report(out, format, &report)?;
    if n_failed > 0 {
        bail!(
            "{n_failed} of {} running dekad numbers could not be converted",
            args.numbers.len()
        );
    }
    Ok(())
}
