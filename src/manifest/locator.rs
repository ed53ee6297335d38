//! Manifest file location
//!
//! The target may be given as the manifest itself or as the directory
//! holding it; without a target the current directory is used.

use crate::error::ManifestError;
use std::path::{Path, PathBuf};

/// File name of the manifest
pub const MANIFEST_FILENAME: &str = "package.json";

/// Resolve the manifest path from an optional command line target
///
/// Fails with `InvalidPath` when the target does not exist and with
/// `NotFound` when the resolved manifest is missing or not a regular file.
pub fn locate_manifest(target: Option<&Path>) -> Result<PathBuf, ManifestError> {
    let manifest = match target {
        Some(path) if path.is_dir() => path.join(MANIFEST_FILENAME),
        Some(path) if path.exists() => path.to_path_buf(),
        Some(path) => {
            return Err(ManifestError::InvalidPath {
                path: path.to_path_buf(),
            })
        }
        None => PathBuf::from(MANIFEST_FILENAME),
    };

    if !manifest.is_file() {
        return Err(ManifestError::not_found(manifest));
    }

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_locate_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join(MANIFEST_FILENAME);
        fs::write(&manifest, "{}").unwrap();

        assert_eq!(locate_manifest(Some(temp_dir.path())).unwrap(), manifest);
    }

    #[test]
    fn test_locate_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join(MANIFEST_FILENAME);
        fs::write(&manifest, "{}").unwrap();

        assert_eq!(locate_manifest(Some(&manifest)).unwrap(), manifest);
    }

    #[test]
    fn test_locate_from_differently_named_file() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join("fixture-package.json");
        fs::write(&manifest, "{}").unwrap();

        assert_eq!(locate_manifest(Some(&manifest)).unwrap(), manifest);
    }

    #[test]
    fn test_directory_without_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let result = locate_manifest(Some(temp_dir.path()));
        assert!(matches!(result, Err(ManifestError::NotFound { .. })));
    }

    #[test]
    fn test_manifest_that_is_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(MANIFEST_FILENAME)).unwrap();

        let result = locate_manifest(Some(temp_dir.path()));
        assert!(matches!(result, Err(ManifestError::NotFound { .. })));
    }

    #[test]
    fn test_nonexistent_target() {
        let result = locate_manifest(Some(Path::new("/nonexistent/path/for/tests")));
        assert!(matches!(result, Err(ManifestError::InvalidPath { .. })));
    }
}
