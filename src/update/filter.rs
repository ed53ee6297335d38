//! Removal of dependencies that are not declared by version
//!
//! Git URLs, tarball links and local paths have nothing to compare against
//! the registry, so they never reach the upgrader.

use super::classifier::is_a_version;
use crate::domain::Dependencies;

/// Keep only the dependencies whose declaration is a recognizable version
pub fn remove_packages_without_valid_versions(dependencies: &Dependencies) -> Dependencies {
    dependencies
        .iter()
        .filter(|(_, declaration)| is_a_version(declaration))
        .map(|(name, declaration)| (name.clone(), declaration.clone()))
        .collect()
}
