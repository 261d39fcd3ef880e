mod args;

pub use args::{CheckArgs, CliArgs, Command, ExportArgs, PairArgs, ReportFormat, SingleArgs};
