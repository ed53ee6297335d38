//! Manifest file reading and writing
//!
//! This module provides:
//! - Reading manifest content
//! - Writing manifest content through a temporary file in the manifest's
//!   directory, so a failed write leaves the original manifest untouched
//! - Applying upgraded declarations to a manifest on disk

use crate::domain::Dependencies;
use crate::error::{AppError, ManifestError};
use crate::manifest::update_package_data;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Result of applying upgrades to a manifest file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    /// Path to the manifest file
    pub path: PathBuf,
    /// Whether the file content changed
    pub file_modified: bool,
}

/// Read a manifest file content
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))
}

/// Write content to a manifest file
///
/// A symlinked manifest is written through to its target, and an existing
/// file keeps its permissions. The content is staged next to the target and
/// persisted over it once complete.
pub fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    replace_file(path, content).map_err(|e| ManifestError::write_error(path, e))
}

fn replace_file(path: &Path, content: &str) -> io::Result<()> {
    let (target, permissions) = match fs::canonicalize(path) {
        Ok(target) => {
            let permissions = fs::metadata(&target)?.permissions();
            (target, Some(permissions))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => (path.to_path_buf(), None),
        Err(e) => return Err(e),
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(content.as_bytes())?;
    staged.as_file().sync_all()?;
    if let Some(permissions) = permissions {
        fs::set_permissions(staged.path(), permissions)?;
    }
    staged.persist(&target).map_err(|e| e.error)?;

    Ok(())
}

/// Rewrite the upgraded declarations in a manifest file
///
/// The file is only written when the patched content differs.
pub fn upgrade_manifest(
    path: &Path,
    current_dependencies: &Dependencies,
    upgraded_dependencies: &Dependencies,
) -> Result<WriteResult, AppError> {
    let content = read_manifest(path)?;
    let patched = update_package_data(&content, current_dependencies, upgraded_dependencies)?;

    let file_modified = patched != content;
    if file_modified {
        write_manifest(path, &patched)?;
    }

    Ok(WriteResult {
        path: path.to_path_buf(),
        file_modified,
    })
}
