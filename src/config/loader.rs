//! Project file discovery and loading.

use crate::config::schema::ProjectFile;
use crate::error::{FreezeupError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional project file in the working directory.
pub const CONFIG_FILE: &str = "freezeup.yml";

/// Path of the project file for a working directory.
pub fn config_path(working_dir: &Path) -> PathBuf {
    working_dir.join(CONFIG_FILE)
}

/// Load `freezeup.yml` from the working directory.
///
/// A missing or blank file yields the defaults.
///
/// # Errors
///
/// Returns `ConfigParseError` if the file is not valid YAML or has
/// unknown keys, `Io` if it exists but cannot be read.
pub fn load_project_file(working_dir: &Path) -> Result<ProjectFile> {
    let path = config_path(working_dir);
    if !path.exists() {
        tracing::debug!("No project file at {}", path.display());
        return Ok(ProjectFile::default());
    }

    let content = fs::read_to_string(&path)?;
    if content.trim().is_empty() {
        return Ok(ProjectFile::default());
    }

    let file = serde_yaml::from_str(&content).map_err(|e| FreezeupError::ConfigParseError {
        path: path.clone(),
        message: e.to_string(),
    })?;
    tracing::debug!("Loaded project file {}", path.display());
    Ok(file)
}
