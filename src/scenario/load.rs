use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use super::types::{SUITE_VERSION, Suite};
use crate::error::EdgewiseError;

/// A loaded suite file with its associated directory.
///
/// Include patterns in the suite are relative to the suite file location,
/// so we need to track where the suite was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedSuite {
    /// The parsed suite
    pub suite: Suite,
    /// The directory containing the suite file
    pub suite_dir: PathBuf,
}

impl LoadedSuite {
    /// Load a suite file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| EdgewiseError::SuiteRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let suite: Suite =
            serde_json::from_str(&content).map_err(|e| EdgewiseError::SuiteParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        if suite.version != SUITE_VERSION {
            return Err(EdgewiseError::UnsupportedVersion {
                path: path.to_path_buf(),
                version: suite.version,
                expected: SUITE_VERSION,
            }
            .into());
        }

        if let Some(scenario) = suite.first_missing_other() {
            return Err(EdgewiseError::MissingOther {
                path: path.to_path_buf(),
                scenario: scenario.name.clone(),
            }
            .into());
        }

        let suite_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { suite, suite_dir })
    }

    /// Resolve include patterns to actual file paths.
    ///
    /// Glob patterns are expanded, and all paths are resolved relative
    /// to the suite file directory.
    pub fn resolve_includes(&self) -> Result<Vec<PathBuf>> {
        let mut results = Vec::new();
        for pattern in &self.suite.include {
            results.extend(expand_pattern(pattern, &self.suite_dir)?);
        }
        Ok(results)
    }
}

/// Load every suite matched by `inputs` (paths or glob patterns), following
/// includes, and merge them into a single suite.
///
/// Each file is loaded at most once, so include cycles are harmless.
pub fn load_suites(inputs: &[impl AsRef<Path>]) -> Result<Suite> {
    let mut pending = Vec::new();
    for input in inputs {
        let pattern = input.as_ref().to_string_lossy();
        pending.extend(expand_pattern(&pattern, Path::new(""))?);
    }

    if pending.is_empty() {
        return Err(EdgewiseError::NoSuites.into());
    }

    // Stack is popped from the back; keep command-line order
    pending.reverse();

    let mut seen = HashSet::new();
    let mut names = Vec::new();
    let mut merged = Suite::default();

    while let Some(path) = pending.pop() {
        let key = std::fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
        if !seen.insert(key) {
            debug!("Skipping already loaded suite {}", path.display());
            continue;
        }

        let loaded = LoadedSuite::load(&path)
            .with_context(|| format!("failed to load suite: {}", path.display()))?;
        debug!(
            "Loaded {} scenarios from {}",
            loaded.suite.scenario_count(),
            path.display()
        );

        let mut includes = loaded
            .resolve_includes()
            .with_context(|| format!("failed to resolve includes of {}", path.display()))?;
        includes.reverse();
        pending.extend(includes);

        if !loaded.suite.name.is_empty() {
            names.push(loaded.suite.name);
        }
        merged.sections.extend(loaded.suite.sections);
    }

    if merged.scenario_count() == 0 {
        return Err(EdgewiseError::NoScenarios.into());
    }

    merged.name = names.join("+");
    info!(
        "Loaded {} suite files with {} scenarios",
        seen.len(),
        merged.scenario_count()
    );

    Ok(merged)
}

/// Expand a single path or glob pattern relative to `base`.
fn expand_pattern(pattern: &str, base: &Path) -> Result<Vec<PathBuf>> {
    if !is_glob_pattern(pattern) {
        return Ok(vec![base.join(pattern)]);
    }

    let full_pattern = base.join(pattern);
    let pattern_str = full_pattern.to_string_lossy();

    let paths = glob::glob(&pattern_str).map_err(|e| EdgewiseError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })?;

    let mut results = Vec::new();
    for entry in paths {
        let path = entry.with_context(|| format!("failed to read glob entry: {}", pattern))?;
        results.push(path);
    }

    Ok(results)
}

/// Check if a pattern contains glob characters.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}
