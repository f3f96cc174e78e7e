// SPDX-License-Identifier: MIT

//! Manifest discovery and loading.

use crate::error::{ManifestError, RepolintError, Result};
use std::path::{Path, PathBuf};

use super::schema::HookSuite;

/// Manifest file names to search for, in order of priority.
const MANIFEST_FILES: &[&str] = &[".pre-commit-config.yaml", ".pre-commit-config.yml"];

/// Find the manifest in the current directory or parent directories.
pub fn find_manifest_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_manifest_file_from(&current_dir)
}

/// Find the manifest starting from a specific directory.
pub fn find_manifest_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in MANIFEST_FILES {
            let path = current.join(name);
            if path.exists() {
                return Some(path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load the manifest from the default locations.
pub fn load_manifest() -> Result<(PathBuf, HookSuite)> {
    let path =
        find_manifest_file().ok_or(RepolintError::Manifest(ManifestError::NotDiscovered))?;
    let suite = load_manifest_from(&path)?;
    Ok((path, suite))
}

/// Load the manifest from a specific path.
pub fn load_manifest_from(path: &Path) -> Result<HookSuite> {
    tracing::debug!("Loading pre-commit manifest from: {:?}", path);

    if !path.exists() {
        return Err(RepolintError::Manifest(ManifestError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        RepolintError::Manifest(ManifestError::ParseError {
            message: format!("Failed to read manifest: {}", e),
        })
    })?;

    parse_manifest(&content)
}

/// Parse a manifest from a YAML string.
pub fn parse_manifest(content: &str) -> Result<HookSuite> {
    serde_yaml::from_str(content).map_err(|e| {
        RepolintError::Manifest(ManifestError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
        })
    })
}
