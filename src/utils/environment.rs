use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Resolve the configured data directory against the working directory
pub fn resolve_data_dir(configured: &Path) -> Result<PathBuf> {
    if configured.is_absolute() {
        return Ok(configured.to_path_buf());
    }
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    Ok(cwd.join(configured))
}
