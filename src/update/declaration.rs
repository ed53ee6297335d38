//! Upgrade of a single version declaration to a newer concrete version
//!
//! The upgraded declaration keeps the policy of the original one: its
//! constraint prefix, its wildcard positions and its number of components.

use super::classifier::{is_wild_digit, version_constraints};
use super::compare::compare_version_digits;
use crate::error::VersionError;
use std::cmp::Ordering;

/// Upgrade an existing dependency declaration to satisfy the latest version
///
/// Components are walked position by position against `latest_version`:
/// - wildcards are kept as written,
/// - a lesser component adopts the latest one and marks the declaration as bumped,
/// - once bumped, every following non-wildcard component realigns to the latest one,
/// - a greater component before any bump also adopts the latest one,
/// - otherwise the declared component is kept.
///
/// Declared components past the end of `latest_version` are dropped.
///
/// # Examples
///
/// ```
/// use package_updater::update::upgrade_dependency_declaration;
///
/// assert_eq!(upgrade_dependency_declaration("1.2.x", "1.3.2").unwrap(), "1.3.x");
/// assert_eq!(upgrade_dependency_declaration("~1.3.7", "1.3.11").unwrap(), "~1.3.11");
/// ```
pub fn upgrade_dependency_declaration(
    declaration: &str,
    latest_version: &str,
) -> Result<String, VersionError> {
    let constraints = version_constraints(declaration);
    let current_components = declaration[constraints.len()..].split('.');
    let latest_components: Vec<&str> = latest_version.split('.').collect();

    let mut proposed_components = Vec::new();
    let mut version_bumped = false;

    for (position, current_digit) in current_components.enumerate() {
        if is_wild_digit(current_digit) {
            proposed_components.push(current_digit);
            continue;
        }

        let Some(&new_digit) = latest_components.get(position) else {
            continue;
        };

        let comparison = compare_version_digits(current_digit, new_digit).map_err(|_| {
            VersionError::malformed(declaration, malformed_part(current_digit, new_digit))
        })?;

        let digit = match comparison {
            Ordering::Less => {
                version_bumped = true;
                new_digit
            }
            // Declared floor is ahead of the published latest
            Ordering::Greater if !version_bumped => new_digit,
            _ if version_bumped => new_digit,
            _ => current_digit,
        };
        proposed_components.push(digit);
    }

    Ok(format!("{}{}", constraints, proposed_components.join(".")))
}

/// Pick the component that made a comparison fail, for error reporting
fn malformed_part<'a>(current_digit: &'a str, new_digit: &'a str) -> &'a str {
    if compare_version_digits(current_digit, current_digit).is_err() {
        current_digit
    } else {
        new_digit
    }
}
