//! Version declaration upgrade engine
//!
//! This module provides:
//! - Classification of version declarations and their constraint prefix
//! - Positional comparison of version components
//! - Policy-preserving upgrade of a single declaration
//! - Batch upgrade of a dependency set against the latest known versions
//! - Removal of dependencies that are not declared by version
//!
//! Everything here is pure: no I/O, no logging.

mod classifier;
mod compare;
mod declaration;
mod filter;

pub use classifier::{is_a_version, is_wild_digit, unconstrained, version_constraints};
pub use compare::compare_version_digits;
pub use declaration::upgrade_dependency_declaration;
pub use filter::remove_packages_without_valid_versions;

use crate::domain::Dependencies;
use crate::error::VersionError;
use node_semver::{Range, Version};

/// Returns true if the latest version satisfies the declaration with its
/// constraint prefix stripped
///
/// `~1.3.7` is checked as `1.3.7`, so a newer patch still counts as an
/// upgrade; `1.2.x` accepts any `1.2` release. Anything that does not parse
/// as an npm range or version is never satisfied.
pub fn is_satisfied(declaration: &str, latest_version: &str) -> bool {
    let range = Range::parse(unconstrained(declaration).trim());
    let version = Version::parse(latest_version.trim());

    match (range, version) {
        (Ok(range), Ok(version)) => range.satisfies(&version),
        _ => false,
    }
}

/// Upgrade a set of dependency declarations based on the latest versions
///
/// Returns an upgraded declaration for every dependency the latest version
/// does not satisfy; satisfied dependencies are left out. A dependency
/// without an entry in `latest_versions` fails the whole batch.
pub fn upgrade_dependencies(
    current_dependencies: &Dependencies,
    latest_versions: &Dependencies,
) -> Result<Dependencies, VersionError> {
    let mut upgraded_dependencies = Dependencies::new();

    for (dependency, current_version) in current_dependencies {
        let latest_version = latest_versions
            .get(dependency)
            .ok_or_else(|| VersionError::missing_latest(dependency))?;

        if is_satisfied(current_version, latest_version) {
            continue;
        }

        let upgraded = upgrade_dependency_declaration(current_version, latest_version)?;
        upgraded_dependencies.insert(dependency.clone(), upgraded);
    }

    Ok(upgraded_dependencies)
}
