//! Version declaration classification
//!
//! Decides whether a manifest value is a version declaration the upgrader
//! can work with, and splits off its constraint prefix.

use regex::Regex;
use std::sync::LazyLock;

/// Optional operator, up to two `digits.` groups, then a final `*`, `x` or number.
/// Anything after the final component (pre-release, build, raw suffix) is accepted.
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(>|<|>=|<=|=|\^|~)?(\d+\.)?(\d+\.)?(\*|\d+|x).*$").unwrap());

/// Returns true if the string is a recognizable version declaration
///
/// Surrounding whitespace is ignored. URLs, git references and local
/// paths never match.
pub fn is_a_version(declaration: &str) -> bool {
    VERSION_RE.is_match(declaration.trim())
}

/// Returns true if a version component is a wildcard marker (`x` or `*`)
pub fn is_wild_digit(digit: &str) -> bool {
    matches!(digit.trim(), "x" | "*")
}

/// Extract the constraint prefix of a declaration
///
/// Characters are accumulated until the first digit or wildcard marker,
/// so `">=1.2.x"` yields `">="` and `"1.2.3"` yields `""`.
pub fn version_constraints(declaration: &str) -> &str {
    let end = declaration
        .find(|c: char| c.is_ascii_digit() || c == 'x' || c == '*')
        .unwrap_or(declaration.len());
    &declaration[..end]
}

/// Strip the constraint prefix, leaving the dot-separated components
pub fn unconstrained(declaration: &str) -> &str {
    &declaration[version_constraints(declaration).len()..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_versions() {
        assert!(is_a_version("2.0.1"));
        assert!(is_a_version("1.2"));
        assert!(is_a_version("0"));
    }

    #[test]
    fn test_wildcards() {
        assert!(is_a_version("1.2.x"));
        assert!(is_a_version("1.x"));
        assert!(is_a_version("1.x.x"));
        assert!(is_a_version("1.2.*"));
        assert!(is_a_version("*"));
    }

    #[test]
    fn test_operators() {
        assert!(is_a_version(">0.2.x"));
        assert!(is_a_version(">=1.0.0"));
        assert!(is_a_version("^1.0.1"));
        assert!(is_a_version("~2.0.1"));
        assert!(is_a_version("<=1.2.7"));
        assert!(is_a_version("=1.2.7"));
        assert!(is_a_version("<1.2.*"));
    }

    #[test]
    fn test_prerelease_suffix() {
        assert!(is_a_version("^0.0.3-beta"));
        assert!(is_a_version("3.4.5-alpha.9"));
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert!(is_a_version("~2.0.1 "));
        assert!(is_a_version("  ^1.0.0\t"));
    }

    #[test]
    fn test_rejects_urls_and_paths() {
        assert!(!is_a_version("git+https://git@github.com/repo/test.git"));
        assert!(!is_a_version("git+ssh://git@github.com/repo/test.git"));
        assert!(!is_a_version("http://git@github.com/repo/test.git"));
        assert!(!is_a_version("git://git@github.com/repo/test.git"));
        assert!(!is_a_version(" file:../local-lib "));
        assert!(!is_a_version("latest"));
        assert!(!is_a_version(""));
    }

    #[test]
    fn test_is_wild_digit() {
        assert!(is_wild_digit("x"));
        assert!(is_wild_digit("*"));
        assert!(is_wild_digit("x "));
        assert!(!is_wild_digit("X1"));
        assert!(!is_wild_digit("1"));
        assert!(!is_wild_digit(""));
    }

    #[test]
    fn test_version_constraints() {
        assert_eq!(version_constraints("1.2.3"), "");
        assert_eq!(version_constraints("~1.3.7"), "~");
        assert_eq!(version_constraints("^0.4.1"), "^");
        assert_eq!(version_constraints(">=1.0.0"), ">=");
        assert_eq!(version_constraints(">0.2.x"), ">");
        assert_eq!(version_constraints("<1.2.*"), "<");
        assert_eq!(version_constraints("*"), "");
        assert_eq!(version_constraints("x.x"), "");
        assert_eq!(version_constraints(">= 1.2.3"), ">= ");
    }

    #[test]
    fn test_constraints_never_contain_digits() {
        for declaration in ["1", "~1", ">=10.0", "^0.0.1-beta.2", "=x"] {
            assert!(!version_constraints(declaration)
                .chars()
                .any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_unconstrained() {
        assert_eq!(unconstrained("~1.3.7"), "1.3.7");
        assert_eq!(unconstrained(">=1.2.x"), "1.2.x");
        assert_eq!(unconstrained("1.2.3"), "1.2.3");
        assert_eq!(unconstrained("^"), "");
    }
}
