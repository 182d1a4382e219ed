//! Build artifact removal.

use anyhow::Context;
use glob::{MatchOptions, Pattern};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::plan::ARTIFACT_PATTERNS;
use crate::error::{IconfinderError, Result};

/// Entries removed by a [`clean`] call, in removal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,
}

/// Remove `build`, `dist` and every `*.egg*` entry directly under `root`.
///
/// Entry names are matched with shell glob rules: `*` never matches a
/// leading dot. Directories are removed recursively and symlinks are
/// unlinked, not followed. Entries that vanish mid-way are not an error, so
/// repeated calls are harmless. A missing `root` has nothing to clean.
pub fn clean(root: &Path) -> Result<CleanReport> {
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };
    let patterns = ARTIFACT_PATTERNS
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid artifact pattern {p}")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut entries = match fs::read_dir(root) {
        Ok(dir) => dir
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<PathBuf>>>()
            .map_err(|source| IconfinderError::CleanFailed {
                path: root.to_path_buf(),
                source,
            })?,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CleanReport::default()),
        Err(source) => {
            return Err(IconfinderError::CleanFailed {
                path: root.to_path_buf(),
                source,
            })
        }
    };
    entries.sort();

    let mut report = CleanReport::default();
    for pattern in &patterns {
        for path in &entries {
            let Some(name) = path.file_name() else {
                continue;
            };
            if !pattern.matches_with(&name.to_string_lossy(), options) {
                continue;
            }
            if remove_entry(path)? {
                tracing::info!("Removed {}", path.display());
                report.removed.push(path.clone());
            }
        }
    }

    Ok(report)
}

/// Remove a file, symlink or directory tree. Returns `false` if it was
/// already gone.
fn remove_entry(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(source) => {
            return Err(IconfinderError::CleanFailed {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(IconfinderError::CleanFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}
