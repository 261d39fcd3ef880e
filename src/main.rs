use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use edgewise::cli::{CheckArgs, CliArgs, Command, PairArgs};
use edgewise::error::EdgewiseError;
use edgewise::output::write_report;
use edgewise::scenario::{builtin_suite, load_suites, save_suite};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! so the message shows regardless of
        // the configured log level
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    match &cli.command {
        Command::Check(args) => check(args),
        Command::Intersect(PairArgs { base, other }) => {
            let points = base.find_intersections(other);
            let mut out = io::stdout().lock();
            for point in &points {
                writeln!(out, "{}", point)?;
            }
            info!("{} intersection points", points.len());
            Ok(())
        }
        Command::Contains(PairArgs { base, other }) => {
            writeln!(io::stdout(), "{}", base.contains(other))?;
            Ok(())
        }
        Command::Adjacent(PairArgs { base, other }) => {
            let side = base
                .adjacent_side(other)
                .map_or_else(|| "none".to_string(), |side| side.to_string());
            writeln!(io::stdout(), "{}", side)?;
            Ok(())
        }
        Command::Validate(args) => {
            writeln!(io::stdout(), "{}", args.rect.is_valid())?;
            Ok(())
        }
        Command::Export(args) => {
            save_suite(&builtin_suite(), &args.path)
                .with_context(|| format!("failed to export suite: {}", args.path.display()))?;
            info!("Wrote built-in suite to {}", args.path.display());
            Ok(())
        }
    }
}

fn check(args: &CheckArgs) -> Result<()> {
    let suite = if args.suites.is_empty() {
        info!("No suites given, running the built-in suite");
        builtin_suite()
    } else {
        load_suites(&args.suites)?
    };

    let report = suite.evaluate();
    write_report(
        &report,
        args.format.unwrap_or_default(),
        args.output.as_deref(),
    )?;

    if let Some(path) = &args.output {
        info!("Saved report to {}", path.display());
    }

    if !report.is_success() {
        warn!("{} scenarios failed", report.failed());
        return Err(EdgewiseError::ScenariosFailed {
            failed: report.failed(),
            total: report.total(),
        }
        .into());
    }

    Ok(())
}
