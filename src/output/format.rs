use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use super::{write_json, write_text};
use crate::cli::ReportFormat;
use crate::error::EdgewiseError;
use crate::scenario::Report;

/// Render a report in the given format, to `path` or to stdout
pub fn write_report(report: &Report, format: ReportFormat, path: Option<&Path>) -> Result<()> {
    // Render in memory first so a failed write never leaves half a report
    let mut buffer = Vec::new();
    match format {
        ReportFormat::Text => write_text(report, &mut buffer)?,
        ReportFormat::Json => write_json(report, &mut buffer)?,
    }

    if let Some(path) = path {
        fs::write(path, buffer).map_err(|e| EdgewiseError::OutputWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&buffer)?;
        stdout.flush()?;
    }

    Ok(())
}
