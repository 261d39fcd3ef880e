use std::path::Path;

use anyhow::{Context, Result};

use super::types::Suite;
use crate::error::EdgewiseError;

/// Save a suite to a JSON file with pretty formatting.
pub fn save_suite(suite: &Suite, path: &Path) -> Result<()> {
    let content =
        serde_json::to_string_pretty(suite).with_context(|| "failed to serialize suite to JSON")?;

    std::fs::write(path, content).map_err(|e| EdgewiseError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
