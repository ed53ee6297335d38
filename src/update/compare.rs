//! Positional comparison of single version components

use super::classifier::is_wild_digit;
use crate::error::VersionError;
use std::cmp::Ordering;

/// Numeric value of a component: its leading run of digits
///
/// `"5-alpha"` reads as 5; a component without leading digits has no value.
fn digit_value(digit: &str) -> Option<u64> {
    let digit = digit.trim();
    let end = digit
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digit.len());
    digit[..end].parse().ok()
}

/// Compare two version components (e.g. the `y` of `x.y.z`)
///
/// A wildcard on either side compares equal. Otherwise the components are
/// compared numerically; numerically equal but textually different
/// components (`"05"` vs `"5"`, `"5-beta"` vs `"5"`) compare as lesser.
pub fn compare_version_digits(digit: &str, other: &str) -> Result<Ordering, VersionError> {
    if is_wild_digit(digit) || is_wild_digit(other) {
        return Ok(Ordering::Equal);
    }

    let value = digit_value(digit).ok_or_else(|| VersionError::malformed_digit(digit))?;
    let other_value = digit_value(other).ok_or_else(|| VersionError::malformed_digit(other))?;

    if value > other_value {
        Ok(Ordering::Greater)
    } else if digit.trim() == other.trim() {
        Ok(Ordering::Equal)
    } else {
        Ok(Ordering::Less)
    }
}
