use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

use dekadal_calendar::CalendarDate;
use dekadal_dekad::{Clock, Dekad, dekad_index};

use crate::cli::IndexArgs;
use crate::output::{OutputFormat, Report, write_report};

#[derive(Debug, Serialize)]
struct IndexReport {
    begin: CalendarDate,
    end: CalendarDate,
    dekads: Vec<CalendarDate>,
}

impl Report for IndexReport {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for date in &self.dekads {
            writeln!(out, "{date}")?;
        }
        Ok(())
    }
}

pub fn run(
    args: &IndexArgs,
    clock: &dyn Clock,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let _span = tracing::info_span!("index").entered();
    let end = args.end.unwrap_or_else(|| clock.now());
    if Dekad::from_date(end) < Dekad::from_date(args.begin) {
        warn!(begin = %args.begin, end = %end, "end dekad precedes begin dekad, index is empty");
    }

    let index = dekad_index(args.begin, end);
    info!(n_dekads = index.len(), "dekad index built");

    let report = IndexReport {
        begin: args.begin,
        end,
        dekads: index.into_vec(),
    };
    write_report(out, format, &report)
}
