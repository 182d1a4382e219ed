//! Configuration file discovery and loading.

use crate::config::schema::ProjectConfig;
use crate::error::{IconfinderError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "iconfinder.yml";

/// Path of the project config file, if one exists.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IconfinderError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IconfinderError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`ProjectConfig`].
///
/// An empty document (or one holding only comments) yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProjectConfig> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| IconfinderError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    if value.is_null() {
        return Ok(ProjectConfig::default());
    }

    serde_yaml::from_value(value).map_err(|e| IconfinderError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Without one, `iconfinder.yml` in the
/// project root is used when present and the defaults otherwise.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ProjectConfig> {
    if let Some(path) = config_override {
        return load_config_file(path);
    }

    match find_project_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => Ok(ProjectConfig::default()),
    }
}
