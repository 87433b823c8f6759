//! Rendering of command results as plain text or JSON.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A command result that can be rendered in either [`OutputFormat`].
pub trait Report: Serialize {
    /// Writes the human-readable rendering.
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Writes `report` to `out` in the requested format.
pub fn write_report<R: Report>(out: &mut dyn Write, format: OutputFormat, report: &R) -> Result<()> {
    match format {
        OutputFormat::Text => report.write_text(out).context("failed to write output")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report).context("failed to write JSON")?;
            writeln!(out).context("failed to write output")?;
        }
    }
    Ok(())
}
