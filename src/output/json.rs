use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::scenario::Report;

#[derive(Serialize)]
struct JsonOutput<'a> {
    meta: Meta,
    summary: Summary,
    report: &'a Report,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    passed: usize,
    failed: usize,
}

/// Write a report as pretty JSON
pub fn write_json(report: &Report, out: &mut impl Write) -> Result<()> {
    let output = JsonOutput {
        meta: Meta {
            app: "edgewise",
            version: env!("CARGO_PKG_VERSION"),
        },
        summary: Summary {
            total: report.total(),
            passed: report.passed(),
            failed: report.failed(),
        },
        report,
    };

    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}
