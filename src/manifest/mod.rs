//! package.json handling
//!
//! This module provides functionality to:
//! - Locate the manifest from a file or directory target
//! - Read the current dependency declarations
//! - Patch upgraded declarations into the raw text
//! - Write the patched manifest back

mod locator;
mod package_json;
mod patcher;
mod writer;

pub use locator::{locate_manifest, MANIFEST_FILENAME};
pub use package_json::current_dependencies;
pub use patcher::update_package_data;
pub use writer::{read_manifest, upgrade_manifest, write_manifest, WriteResult};

use crate::domain::Dependencies;
use crate::error::ManifestError;
use std::path::Path;

/// Read and parse the current dependencies from a manifest file path
pub fn read_current_dependencies(path: &Path) -> Result<Dependencies, ManifestError> {
    let content = read_manifest(path)?;
    current_dependencies(&content, path)
}
