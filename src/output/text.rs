use std::io::{self, Write};

use crate::scenario::{Outcome, Report};

/// Write a report as one line per scenario, grouped by section
pub fn write_text(report: &Report, out: &mut impl Write) -> io::Result<()> {
    for (i, section) in report.sections.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "---{}---", section.title)?;

        for result in &section.results {
            match &result.outcome {
                Outcome::Pass => writeln!(out, "{}: PASS", result.name)?,
                Outcome::Fail { reason } => writeln!(out, "{}: FAIL - {}", result.name, reason)?,
            }
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "{}/{} scenarios passed",
        report.passed(),
        report.total()
    )
}
