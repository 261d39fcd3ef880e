use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::geometry::Rectangle;

#[derive(Parser, Debug)]
#[command(name = "edgewise")]
#[command(
    version,
    about = "Intersection, containment and adjacency of axis-aligned rectangles",
    long_about = None
)]
pub struct CliArgs {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run scenario suites and report PASS/FAIL per scenario
    Check(CheckArgs),
    /// Print the points where the edges of BASE cross the edges of OTHER
    Intersect(PairArgs),
    /// Print whether BASE fully contains OTHER
    Contains(PairArgs),
    /// Print the side of BASE that OTHER is adjacent to, or "none"
    Adjacent(PairArgs),
    /// Print whether a rectangle is well-formed
    Validate(SingleArgs),
    /// Write the built-in suite to a JSON file
    Export(ExportArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Suite files or glob patterns [default: built-in suite]
    pub suites: Vec<PathBuf>,

    /// Report format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct PairArgs {
    /// Base rectangle as north,east,south,west (e.g. 10,10,5,5)
    #[arg(value_name = "BASE", allow_hyphen_values = true)]
    pub base: Rectangle,

    /// Rectangle compared against BASE, same notation
    #[arg(value_name = "OTHER", allow_hyphen_values = true)]
    pub other: Rectangle,
}

#[derive(Args, Debug, Clone)]
pub struct SingleArgs {
    /// Rectangle as north,east,south,west
    #[arg(value_name = "RECT", allow_hyphen_values = true)]
    pub rect: Rectangle,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Destination JSON file
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One PASS/FAIL line per scenario
    #[default]
    Text,
    /// Machine readable report with a summary
    Json,
}
