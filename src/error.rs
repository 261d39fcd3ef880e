use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdgewiseError {
    #[error("Failed to read suite '{path}': {source}")]
    SuiteRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse suite '{path}': {source}")]
    SuiteParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Suite '{path}' has unsupported version {version} (expected {expected})")]
    UnsupportedVersion {
        path: PathBuf,
        version: u32,
        expected: u32,
    },

    #[error("Scenario '{scenario}' in '{path}' needs an 'other' rectangle")]
    MissingOther { path: PathBuf, scenario: String },

    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("No suite files matched the given inputs")]
    NoSuites,

    #[error("Loaded suites contain no scenarios")]
    NoScenarios,

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{failed} of {total} scenarios failed")]
    ScenariosFailed { failed: usize, total: usize },
}
